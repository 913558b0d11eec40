//! Fixed chart palette. Colors are handed out by the position a category was
//! first seen in, so a category keeps its color when counts reorder.

pub const PALETTE: &[&str] = &[
    "#E50914", "#1CE783", "#113CCF", "#F5C518", "#8E44AD", "#FF7F50",
    "#2ECC71", "#3498DB", "#E67E22", "#95A5A6", "#D35400", "#16A085",
];

/// Color for the `index`-th distinct category, wrapping around the palette.
pub fn color_for(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

use eframe::egui::Color32;

// ---------------------------------------------------------------------------
// Fixed chart palette
// ---------------------------------------------------------------------------

/// The dashboard's five chart colors, cycled in slice / series order.
pub const PALETTE: [Color32; 5] = [
    Color32::from_rgb(0x26, 0x46, 0x53),
    Color32::from_rgb(0x2a, 0x9d, 0x8f),
    Color32::from_rgb(0xe9, 0xc4, 0x6a),
    Color32::from_rgb(0xf4, 0xa2, 0x61),
    Color32::from_rgb(0xe7, 0x6f, 0x51),
];

/// Dashboard header color.
pub const HEADER_COLOR: Color32 = Color32::from_rgb(0x50, 0x3d, 0x36);

/// Chart title color.
pub const TITLE_COLOR: Color32 = Color32::from_rgb(0x26, 0x46, 0x53);

/// Color for the i-th slice or series, cycling through [`PALETTE`].
pub fn palette_color(index: usize) -> Color32 {
    PALETTE[index % PALETTE.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_cycles_after_five_entries() {
        assert_eq!(palette_color(0), PALETTE[0]);
        assert_eq!(palette_color(4), PALETTE[4]);
        assert_eq!(palette_color(5), PALETTE[0]);
        assert_eq!(palette_color(12), PALETTE[2]);
    }
}

/// Vertical offsets, in blocks, for each placement a slab `type` value
/// expands to. Slab halves sit a quarter block off the voxel center; a
/// double slab is two placements half a block apart sharing one palette
/// entry.
pub fn vertical_offsets(slab_type: Option<&str>) -> &'static [f64] {
    match slab_type {
        Some("bottom") => &[-0.25],
        Some("top") => &[0.25],
        Some("double") => &[-0.25, 0.25],
        _ => &[0.0],
    }
}

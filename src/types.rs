use serde::{Deserialize, Serialize};

pub type Result<T> = std::result::Result<T, crate::error::SandmaticError>;

/// Integer voxel coordinate. Hash/Eq so it can key the tile entity index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl BlockPos {
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        BlockPos { x, y, z }
    }
}

/// Fractional position. Slab normalization moves placements off the integer
/// grid in quarter-block steps, so emitted positions are f64.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Vec3 { x, y, z }
    }
}

impl From<BlockPos> for Vec3 {
    fn from(pos: BlockPos) -> Self {
        Vec3::new(pos.x as f64, pos.y as f64, pos.z as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_block_pos_as_map_key() {
        let mut map = HashMap::new();
        map.insert(BlockPos::new(1, 2, 3), "sign");
        assert_eq!(map.get(&BlockPos::new(1, 2, 3)), Some(&"sign"));
        assert_eq!(map.get(&BlockPos::new(1, 2, 4)), None);
    }

    #[test]
    fn test_vec3_from_block_pos() {
        let v = Vec3::from(BlockPos::new(-1, 64, 7));
        assert_eq!(v, Vec3::new(-1.0, 64.0, 7.0));
    }
}

use voxa_blocks::VoxelKind;
use voxa_search::SearchProblem;

use crate::world::World;

pub type GridPos = (i32, i32, i32);

const VERTICAL_OFFSETS: [i32; 3] = [0, 1, -1];

/// Walking query for an actor `height` voxels tall. Nodes are voxel cells the
/// actor's feet occupy.
pub struct WalkProblem<'w> {
    world: &'w World,
    height: u32,
    goal: GridPos,
}

impl<'w> WalkProblem<'w> {
    pub fn new(world: &'w World, height: u32, goal: GridPos) -> Self {
        Self {
            world,
            height,
            goal,
        }
    }

    /// Headroom: `height` Empty cells from `(x, y, z)` upward.
    pub fn can_go_through(&self, x: i32, y: i32, z: i32) -> bool {
        (0..self.height as i32).all(|h| self.world.test(x, y + h, z, VoxelKind::Empty))
    }

    /// Footing plus headroom. The cell below must be Solid; Obstacles are never ground.
    pub fn can_step_at(&self, x: i32, y: i32, z: i32) -> bool {
        self.world.test(x, y - 1, z, VoxelKind::Solid) && self.can_go_through(x, y, z)
    }
}

impl SearchProblem for WalkProblem<'_> {
    type Node = GridPos;

    fn successors(&self, node: &GridPos, parent: Option<&GridPos>, out: &mut Vec<GridPos>) {
        let (x, y, z) = *node;
        for dy in VERTICAL_OFFSETS {
            for dz in -1..=1 {
                for dx in -1..=1 {
                    if dx == 0 && dz == 0 {
                        continue;
                    }
                    let next = (x + dx, y + dy, z + dz);
                    if parent == Some(&next) {
                        continue;
                    }
                    if self.can_step_at(next.0, next.1, next.2) {
                        out.push(next);
                    }
                }
            }
        }
    }

    fn cost(&self, _from: &GridPos, _to: &GridPos) -> f32 {
        1.0
    }

    fn heuristic(&self, node: &GridPos) -> f32 {
        let dx = (node.0 - self.goal.0) as f32;
        let dy = (node.1 - self.goal.1) as f32;
        let dz = (node.2 - self.goal.2) as f32;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    fn is_goal(&self, node: &GridPos) -> bool {
        *node == self.goal
    }
}

use voxa_chunk::BlockCoord;
use voxa_mesh_cpu::ChunkMesh;

/// Draws chunk meshes. Mesh vertices are chunk-local; place them with
/// `mesh.position`. `mesh.version` changes whenever the buffers were rebuilt.
pub trait ChunkRenderer {
    fn draw_chunk(&mut self, chunk: BlockCoord, mesh: &ChunkMesh);
}

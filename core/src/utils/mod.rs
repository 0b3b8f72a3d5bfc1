mod chunk_assets;
mod chunk_group_graph;
mod extract_chunks;
mod html_membership;
mod resource_type;
pub use chunk_assets::*;
pub use chunk_group_graph::*;
pub use extract_chunks::*;
pub use html_membership::*;
pub use resource_type::*;

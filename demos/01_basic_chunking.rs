//! Basic Text Chunking
//!
//! Chunk an extracted document the way an ingestion pipeline would, then tag
//! each chunk with its index.
//!
//! ```bash
//! RUST_LOG=tranche=debug cargo run --example 01_basic_chunking
//! ```

use tracing_subscriber::EnvFilter;
use tranche::{BoundaryChunker, Chunker};

fn main() -> Result<(), tranche::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let document = "Machine learning models learn patterns from data.\n\n\
        They generalize these patterns to make predictions. \
        This is fundamentally different from traditional programming. \
        Deep learning extends this with multiple hidden layers.\n\n\
        Each layer learns increasingly abstract representations.";

    // A tiny limit so the example exercises every level.
    let chunker = BoundaryChunker::new(80)?;
    let slabs = chunker.chunk(document);

    println!("Document: {} bytes", document.len());
    println!("Chunks: {}\n", slabs.len());

    for slab in &slabs {
        println!("[{}] {} bytes: {:?}", slab.index, slab.len(), slab.text);
    }

    Ok(())
}

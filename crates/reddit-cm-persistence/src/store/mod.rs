pub mod atomic_writer;

pub use atomic_writer::AtomicWriter;

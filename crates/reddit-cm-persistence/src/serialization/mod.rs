pub mod json_serializer;
pub mod yaml_serializer;

pub use json_serializer::JsonSerializer;
pub use yaml_serializer::YamlSerializer;

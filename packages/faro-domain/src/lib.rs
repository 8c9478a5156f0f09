pub mod lifecycle;
pub mod matcher;
pub mod normalize;
pub mod records;
pub mod scorer;

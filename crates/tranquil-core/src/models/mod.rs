pub mod assessment;
pub mod dass21;

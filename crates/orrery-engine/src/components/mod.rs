pub mod line;
pub mod mesh;
pub mod object;
pub mod points;

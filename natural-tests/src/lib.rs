pub mod shapes;
pub mod tree;

#[cfg(test)]
mod laws;

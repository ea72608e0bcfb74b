pub mod arq;
pub mod frame;
pub mod load;
pub mod loss;
pub mod report;
pub mod trace;

#[cfg(test)]
mod test;

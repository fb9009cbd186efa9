pub mod util;

#[cfg(test)]
mod negative;

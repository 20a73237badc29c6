//! Инфраструктурный слой вокруг покерного движка: RNG-реализации для движка.

pub mod rng;

pub use rng::*;

//! Инфраструктурный слой вокруг покерного движка:
//! - RNG-реализации для колоды и движка (системный, детерминированный, глобальный с seed).

pub mod rng;

pub use rng::*;

use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// RNG интерфейс для колоды и движка.
///
/// Единственная операция, которая нужна ядру: перемешать срез (Fisher–Yates).
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);
}

/// Системный RNG (thread_rng) – для живой игры, без воспроизводимости.
#[derive(Clone, Debug, Default)]
pub struct SystemRng;

impl RandomSource for SystemRng {
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut rand::thread_rng());
    }
}

/// Детерминированный RNG для тестов и реплея.
/// Позволяет воспроизводить одни и те же раздачи при одинаковом seed.
#[derive(Clone, Debug)]
pub struct DeterministicRng {
    inner: StdRng,
}

impl DeterministicRng {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }

    /// Доступ к генератору (например, для выборки случайных карт в тестах).
    pub fn inner_mut(&mut self) -> &mut StdRng {
        &mut self.inner
    }
}

impl RandomSource for DeterministicRng {
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }
}

//
// Глобальный (на процесс) генератор.
//
// Если `seed_global_rng` не вызывали, при первом использовании он сидится
// от системных часов. Тесты, которым нужна воспроизводимость, обязаны
// вызвать `seed_global_rng` явно.
//
static GLOBAL_RNG: Mutex<Option<StdRng>> = Mutex::new(None);

fn global() -> MutexGuard<'static, Option<StdRng>> {
    GLOBAL_RNG.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Явно задать seed глобального генератора.
pub fn seed_global_rng(seed: u64) {
    log::debug!("global rng seeded explicitly: {seed}");
    *global() = Some(StdRng::seed_from_u64(seed));
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}

/// Хэндл на глобальный генератор: `Deck::shuffle()` и т.п. используют его.
#[derive(Clone, Copy, Debug, Default)]
pub struct GlobalRng;

impl RandomSource for GlobalRng {
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        let mut guard = global();
        let rng = guard.get_or_insert_with(|| {
            let seed = clock_seed();
            log::debug!("global rng auto-seeded from clock: {seed}");
            StdRng::seed_from_u64(seed)
        });
        slice.shuffle(rng);
    }
}

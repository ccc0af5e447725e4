use std::time::Duration;

/// Marca el paso del tiempo real entre ticks.
pub trait Pacer {
    /// Bloquea durante `units` unidades de tiempo.
    fn wait_units(&mut self, units: u64);
}

/// Pacer de producción: duerme el hilo `tick` por unidad.
#[derive(Debug, Clone, Copy)]
pub struct ThreadPacer {
    tick: Duration,
}

impl ThreadPacer {
    pub fn new(tick: Duration) -> Self { Self { tick } }
}

impl Default for ThreadPacer {
    fn default() -> Self { Self::new(Duration::from_secs(1)) }
}

impl Pacer for ThreadPacer {
    fn wait_units(&mut self, units: u64) {
        for _ in 0..units {
            std::thread::sleep(self.tick);
        }
    }
}

/// Pacer que nunca duerme; sólo cuenta las unidades pedidas.
/// Para tests y para `--dry-run`.
#[derive(Debug, Clone, Copy, Default)]
pub struct InstantPacer {
    pub waited_units: u64,
}

impl Pacer for InstantPacer {
    fn wait_units(&mut self, units: u64) { self.waited_units += units; }
}

impl<P: Pacer + ?Sized> Pacer for &mut P {
    fn wait_units(&mut self, units: u64) { (**self).wait_units(units) }
}

impl<P: Pacer + ?Sized> Pacer for Box<P> {
    fn wait_units(&mut self, units: u64) { (**self).wait_units(units) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn thread_pacer_blocks_one_tick_per_unit() {
        let mut pacer = ThreadPacer::new(Duration::from_millis(10));
        let start = Instant::now();
        pacer.wait_units(3);
        assert!(start.elapsed() >= Duration::from_millis(30), "{:?}", start.elapsed());
    }

    #[test]
    fn boxed_pacer_delegates() {
        let mut boxed: Box<dyn Pacer> = Box::new(InstantPacer::default());
        boxed.wait_units(4);
        let mut inner = InstantPacer::default();
        {
            let mut by_ref: Box<&mut InstantPacer> = Box::new(&mut inner);
            by_ref.wait_units(2);
        }
        assert_eq!(inner.waited_units, 2);
    }
}

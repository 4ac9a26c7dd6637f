//! Chart instance lifecycle
//!
//! A [`ChartSlot`] owns at most one live chart bound to a drawing surface.
//! Every render tears the previous instance down before a new one is built,
//! and dropping the slot releases whatever is still attached.

use crate::models::QualityDistribution;
use std::fmt::Display;
use tracing::debug;

/// Something that can build and tear down chart instances
pub trait ChartBackend {
    /// Drawing surface the chart binds to (a canvas in the browser)
    type Surface;
    /// Live chart handle holding the surface's drawing context
    type Instance;
    type Error: Display;

    fn create(
        &self,
        surface: &Self::Surface,
        data: &QualityDistribution,
    ) -> Result<Self::Instance, Self::Error>;

    fn dispose(&self, instance: Self::Instance);
}

pub struct ChartSlot<B: ChartBackend> {
    backend: B,
    instance: Option<B::Instance>,
}

impl<B: ChartBackend> ChartSlot<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            instance: None,
        }
    }

    /// (Re)create the chart once the surface, the data and the charting
    /// library are all available
    ///
    /// Returns `true` when a new instance is live. Missing inputs are not an
    /// error: nothing is drawn and any existing chart is left untouched.
    pub fn render(
        &mut self,
        surface: Option<&B::Surface>,
        data: Option<&QualityDistribution>,
        library_ready: bool,
    ) -> bool {
        let (Some(surface), Some(data)) = (surface, data) else {
            return false;
        };
        if !library_ready {
            return false;
        }

        self.clear();

        match self.backend.create(surface, data) {
            Ok(instance) => {
                self.instance = Some(instance);
                true
            }
            Err(e) => {
                debug!(error = %e, "Chart creation failed");
                false
            }
        }
    }

    /// Dispose the live instance, if any
    pub fn clear(&mut self) {
        if let Some(instance) = self.instance.take() {
            self.backend.dispose(instance);
        }
    }

    pub fn is_live(&self) -> bool {
        self.instance.is_some()
    }
}

impl<B: ChartBackend> Drop for ChartSlot<B> {
    fn drop(&mut self) {
        self.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq)]
    enum Event {
        Create(u32),
        Dispose(u32),
    }

    #[derive(Default, Clone)]
    struct Recorder {
        events: Rc<RefCell<Vec<Event>>>,
        next_id: Rc<RefCell<u32>>,
        fail: bool,
    }

    impl Recorder {
        fn live(&self) -> i32 {
            self.events.borrow().iter().fold(0, |n, e| match e {
                Event::Create(_) => n + 1,
                Event::Dispose(_) => n - 1,
            })
        }
    }

    impl ChartBackend for Recorder {
        type Surface = ();
        type Instance = u32;
        type Error = &'static str;

        fn create(&self, _: &(), _: &QualityDistribution) -> Result<u32, &'static str> {
            if self.fail {
                return Err("library missing");
            }
            let mut next = self.next_id.borrow_mut();
            *next += 1;
            self.events.borrow_mut().push(Event::Create(*next));
            Ok(*next)
        }

        fn dispose(&self, instance: u32) {
            self.events.borrow_mut().push(Event::Dispose(instance));
        }
    }

    #[test]
    fn test_recreate_disposes_previous_first() {
        let recorder = Recorder::default();
        let mut slot = ChartSlot::new(recorder.clone());
        let data = QualityDistribution([1.0, 2.0, 3.0, 4.0, 5.0]);

        assert!(slot.render(Some(&()), Some(&data), true));
        assert!(slot.render(Some(&()), Some(&data), true));
        assert!(slot.render(Some(&()), Some(&data), true));

        assert_eq!(
            *recorder.events.borrow(),
            vec![
                Event::Create(1),
                Event::Dispose(1),
                Event::Create(2),
                Event::Dispose(2),
                Event::Create(3),
            ]
        );
        assert_eq!(recorder.live(), 1);
    }

    #[test]
    fn test_missing_inputs_do_nothing() {
        let recorder = Recorder::default();
        let mut slot = ChartSlot::new(recorder.clone());
        let data = QualityDistribution::default();

        assert!(!slot.render(None, Some(&data), true));
        assert!(!slot.render(Some(&()), None, true));
        assert!(!slot.render(Some(&()), Some(&data), false));

        assert!(recorder.events.borrow().is_empty());
        assert!(!slot.is_live());
    }

    #[test]
    fn test_drop_releases_instance() {
        let recorder = Recorder::default();
        {
            let mut slot = ChartSlot::new(recorder.clone());
            slot.render(Some(&()), Some(&QualityDistribution::default()), true);
            assert_eq!(recorder.live(), 1);
        }
        assert_eq!(recorder.live(), 0);
    }

    #[test]
    fn test_failed_create_leaves_nothing_attached() {
        let recorder = Recorder {
            fail: true,
            ..Recorder::default()
        };
        let mut slot = ChartSlot::new(recorder.clone());
        assert!(!slot.render(Some(&()), Some(&QualityDistribution::default()), true));
        assert!(!slot.is_live());
        assert_eq!(recorder.live(), 0);
    }
}

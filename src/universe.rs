/// Evenly stepped samples over the half open range `[start, stop)`.
///
/// The universe itself is only a description; iterating it is lazy and can be
/// restarted as often as needed since every call to `iter` starts afresh.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Universe {
    start: f64,
    step: f64,
    len: usize,
}

impl Universe {
    pub(crate) fn new(start: f64, stop: f64, step: f64) -> Self {
        // Same sample count numpy.arange would produce
        let len = if stop > start {
            ((stop - start) / step).ceil() as usize
        } else {
            0
        };

        Universe { start, step, len }
    }

    pub(crate) fn empty(step: f64) -> Self {
        Universe {
            start: 0.,
            step,
            len: 0,
        }
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn iter(&self) -> Samples {
        Samples {
            start: self.start,
            step: self.step,
            index: 0,
            len: self.len,
        }
    }
}

impl IntoIterator for Universe {
    type Item = f64;
    type IntoIter = Samples;

    fn into_iter(self) -> Samples {
        self.iter()
    }
}

impl IntoIterator for &Universe {
    type Item = f64;
    type IntoIter = Samples;

    fn into_iter(self) -> Samples {
        self.iter()
    }
}

#[derive(Clone, Debug)]
pub struct Samples {
    start: f64,
    step: f64,
    index: usize,
    len: usize,
}

impl Iterator for Samples {
    type Item = f64;

    #[inline]
    fn next(&mut self) -> Option<f64> {
        if self.index >= self.len {
            None
        } else {
            // Computed from the index rather than accumulated so error doesn't drift
            let i = self.index;
            self.index += 1;
            Some(self.start + self.step * i as f64)
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.len - self.index;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Samples {}

#[test]
fn test_universe() {
    let u = Universe::new(0., 12., 1.);

    assert_eq!(u.len(), 12);
    assert_eq!(u.iter().next(), Some(0.));
    assert_eq!(u.iter().last(), Some(11.));

    // Restartable
    assert_eq!(u.iter().count(), u.iter().count());

    let u = Universe::new(13., 26., 0.1);

    assert_eq!(u.len(), 130);
    assert!((u.iter().last().unwrap() - 25.9).abs() < 1e-9);

    let u = Universe::new(0., 1., 0.3);

    assert_eq!(u.iter().collect::<Vec<_>>().len(), 4);
    assert!(Universe::new(5., 5., 1.).is_empty());
    assert!(Universe::empty(1.).iter().next().is_none());
}

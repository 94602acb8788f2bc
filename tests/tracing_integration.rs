//! Events emitted by `traced` and the driving functions, seen through a
//! real subscriber

use std::io;
use std::sync::{Arc, Mutex};

use tracing::Level;
use transducers::prelude::*;

#[derive(Clone, Default)]
struct Buffer(Arc<Mutex<Vec<u8>>>);

impl Buffer {
    fn contents(&self) -> String {
        let bytes = self.0.lock().unwrap();
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl io::Write for Buffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn capture<T>(level: Level, f: impl FnOnce() -> T) -> (T, String) {
    let buffer = Buffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    let result = tracing::subscriber::with_default(subscriber, f);
    (result, buffer.contents())
}

#[test]
fn traced_reports_each_step_with_label() {
    let xform = comp!(traced("outer"), map(|x: i32| x * 2), traced("inner"));
    let (res, logs) = capture(Level::TRACE, || into(Vec::new(), &xform, vec![1, 2, 3]));

    assert_eq!(res, vec![2, 4, 6]);
    assert_eq!(logs.matches("label=\"outer\"").count(), 4);
    assert_eq!(logs.matches("label=\"inner\"").count(), 4);
    assert!(logs.contains("transducers::traced"));
}

#[test]
fn traced_inside_erased_value_still_reports() {
    let xform: BoxedTransducer<i32> = comp(traced("erased"), take(1)).boxed();
    let (res, logs) = capture(Level::TRACE, || into(Vec::new(), &xform, vec![7, 8]));

    assert_eq!(res, vec![7]);
    assert!(logs.contains("label=\"erased\""));
    assert!(logs.contains("reduced=true"));
}

#[test]
fn debug_level_hides_per_step_events() {
    let xform = traced("quiet");
    let (_, logs) = capture(Level::DEBUG, || into(Vec::new(), &xform, vec![1, 2]));

    assert!(!logs.contains("step="));
    assert!(logs.contains("steps=2"));
    assert!(logs.contains("complete"));
}

#[test]
fn generator_start_is_reported() {
    let (res, logs) = capture(Level::DEBUG, || {
        transduce(comp(take(3), enumerate()), |acc: usize, i: usize| acc + i, 0, ())
    });

    assert_eq!(res, 3);
    assert!(logs.contains("starting generator-mode reduction"));
}

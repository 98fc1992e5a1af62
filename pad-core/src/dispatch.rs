//! Turns fired gestures into key output.

use embedded_hal_async::delay::DelayNs;

use crate::action::{ActionSpec, Gesture, GestureConfig};
use crate::keys::Combo;
use crate::output::{KeyEmitter, OutputError};

/// Pause between two combos of a sequence.
pub const SEQUENCE_ITEM_DELAY_MS: u32 = 50;

/// Fires the actions configured for one button.
///
/// The dispatcher only borrows the button's table; it keeps no state, so one
/// can be built per fired gesture.
#[derive(Debug, Clone, Copy)]
pub struct ActionDispatcher<'a> {
    config: &'a GestureConfig,
}

impl<'a> ActionDispatcher<'a> {
    #[must_use]
    pub const fn new(config: &'a GestureConfig) -> Self {
        Self { config }
    }

    /// Type whatever is bound to `gesture`.
    ///
    /// Unbound gestures and empty combos do nothing. A sequence waits
    /// [`SEQUENCE_ITEM_DELAY_MS`] between items; empty items are skipped
    /// without a pause. Returns how many combos were sent.
    ///
    /// # Errors
    ///
    /// The first emitter error stops the sequence and is returned.
    pub async fn fire<E, D>(
        &self,
        gesture: Gesture,
        emitter: &mut E,
        delay: &mut D,
    ) -> Result<usize, OutputError>
    where
        E: KeyEmitter,
        D: DelayNs,
    {
        match self.config.action(gesture) {
            None => Ok(0),
            Some(ActionSpec::Combo(combo)) => send_combo(emitter, combo).await,
            Some(ActionSpec::Sequence(combos)) => send_sequence(emitter, delay, combos).await,
        }
    }
}

async fn send_combo<E: KeyEmitter>(emitter: &mut E, combo: &Combo) -> Result<usize, OutputError> {
    if combo.is_empty() {
        return Ok(0);
    }
    emitter.send(combo).await?;
    Ok(1)
}

async fn send_sequence<E: KeyEmitter, D: DelayNs>(
    emitter: &mut E,
    delay: &mut D,
    combos: &[Combo],
) -> Result<usize, OutputError> {
    let mut sent = 0;
    for combo in combos.iter().filter(|combo| !combo.is_empty()) {
        if sent > 0 {
            delay.delay_ms(SEQUENCE_ITEM_DELAY_MS).await;
        }
        emitter.send(combo).await?;
        sent += 1;
    }
    Ok(sent)
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::keys::Keycode;
    use core::future::Future;
    use core::pin::Pin;
    use core::task::{Context, Poll, RawWaker, RawWakerVTable, Waker};
    use std::sync::{Arc, Mutex};
    use std::vec::Vec;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Event {
        Sent(Combo),
        Slept(u32),
    }

    // Records emitted combos and delays into one shared timeline
    struct MockEmitter {
        log: Arc<Mutex<Vec<Event>>>,
        fail_after: Option<usize>,
        sent: usize,
    }

    impl KeyEmitter for MockEmitter {
        fn send(&mut self, combo: &Combo) -> impl Future<Output = Result<(), OutputError>> {
            let result = if self.fail_after == Some(self.sent) {
                Err(OutputError::Io)
            } else {
                self.sent += 1;
                self.log.lock().unwrap().push(Event::Sent(*combo));
                Ok(())
            };
            core::future::ready(result)
        }
    }

    struct MockDelay {
        log: Arc<Mutex<Vec<Event>>>,
    }

    impl DelayNs for MockDelay {
        async fn delay_ns(&mut self, ns: u32) {
            self.log.lock().unwrap().push(Event::Slept(ns / 1_000_000));
        }

        async fn delay_ms(&mut self, ms: u32) {
            self.log.lock().unwrap().push(Event::Slept(ms));
        }
    }

    fn mocks(fail_after: Option<usize>) -> (MockEmitter, MockDelay, Arc<Mutex<Vec<Event>>>) {
        let log = Arc::new(Mutex::new(Vec::new()));
        (
            MockEmitter {
                log: log.clone(),
                fail_after,
                sent: 0,
            },
            MockDelay { log: log.clone() },
            log,
        )
    }

    // Helper to run a future to completion (simple blocking executor)
    fn block_on<F: Future>(mut f: F) -> F::Output {
        fn noop_raw_waker() -> RawWaker {
            fn noop(_: *const ()) {}
            fn clone(_: *const ()) -> RawWaker {
                noop_raw_waker()
            }
            static VTABLE: RawWakerVTable = RawWakerVTable::new(clone, noop, noop, noop);
            RawWaker::new(core::ptr::null(), &VTABLE)
        }

        let waker = unsafe { Waker::from_raw(noop_raw_waker()) };
        let mut cx = Context::from_waker(&waker);

        // SAFETY: We don't move f after pinning
        let mut f = unsafe { Pin::new_unchecked(&mut f) };

        match f.as_mut().poll(&mut cx) {
            Poll::Ready(result) => result,
            Poll::Pending => panic!("Mock future returned Pending unexpectedly"),
        }
    }

    const CTRL_C: Combo = Combo::new(&[Keycode::CONTROL, Keycode::C]);
    const CTRL_V: Combo = Combo::new(&[Keycode::CONTROL, Keycode::V]);
    static PASTE_TWICE: [Combo; 3] = [CTRL_V, Combo::EMPTY, CTRL_V];

    #[test]
    fn test_combo_sent_once() {
        let config = GestureConfig::EMPTY.with(Gesture::Press, ActionSpec::Combo(CTRL_C));
        let (mut emitter, mut delay, log) = mocks(None);

        let sent = block_on(ActionDispatcher::new(&config).fire(
            Gesture::Press,
            &mut emitter,
            &mut delay,
        ));

        assert_eq!(sent, Ok(1));
        assert_eq!(*log.lock().unwrap(), [Event::Sent(CTRL_C)]);
    }

    #[test]
    fn test_unbound_gesture_is_noop() {
        let config = GestureConfig::EMPTY.with(Gesture::Press, ActionSpec::Combo(CTRL_C));
        let (mut emitter, mut delay, log) = mocks(None);

        let sent = block_on(ActionDispatcher::new(&config).fire(
            Gesture::LongPress,
            &mut emitter,
            &mut delay,
        ));

        assert_eq!(sent, Ok(0));
        assert!(log.lock().unwrap().is_empty());
    }

    #[test]
    fn test_empty_combo_and_sequence_emit_nothing() {
        let config = GestureConfig::EMPTY
            .with(Gesture::Press, ActionSpec::Combo(Combo::EMPTY))
            .with(Gesture::DoublePress, ActionSpec::Sequence(&[]));
        let (mut emitter, mut delay, log) = mocks(None);
        let dispatcher = ActionDispatcher::new(&config);

        assert_eq!(
            block_on(dispatcher.fire(Gesture::Press, &mut emitter, &mut delay)),
            Ok(0)
        );
        assert_eq!(
            block_on(dispatcher.fire(Gesture::DoublePress, &mut emitter, &mut delay)),
            Ok(0)
        );
        assert!(log.lock().unwrap().is_empty());
    }

    #[test]
    fn test_sequence_order_and_delays() {
        static SEQ: [Combo; 2] = [CTRL_C, CTRL_V];
        let config = GestureConfig::EMPTY.with(Gesture::LongPress, ActionSpec::Sequence(&SEQ));
        let (mut emitter, mut delay, log) = mocks(None);

        let sent = block_on(ActionDispatcher::new(&config).fire(
            Gesture::LongPress,
            &mut emitter,
            &mut delay,
        ));

        assert_eq!(sent, Ok(2));
        assert_eq!(
            *log.lock().unwrap(),
            [
                Event::Sent(CTRL_C),
                Event::Slept(SEQUENCE_ITEM_DELAY_MS),
                Event::Sent(CTRL_V),
            ]
        );
    }

    #[test]
    fn test_sequence_skips_empty_items() {
        let config =
            GestureConfig::EMPTY.with(Gesture::DoublePress, ActionSpec::Sequence(&PASTE_TWICE));
        let (mut emitter, mut delay, log) = mocks(None);

        let sent = block_on(ActionDispatcher::new(&config).fire(
            Gesture::DoublePress,
            &mut emitter,
            &mut delay,
        ));

        assert_eq!(sent, Ok(2));
        assert_eq!(
            *log.lock().unwrap(),
            [
                Event::Sent(CTRL_V),
                Event::Slept(SEQUENCE_ITEM_DELAY_MS),
                Event::Sent(CTRL_V),
            ]
        );
    }

    #[test]
    fn test_sequence_stops_on_first_error() {
        static SEQ: [Combo; 3] = [CTRL_C, CTRL_V, CTRL_C];
        let config = GestureConfig::EMPTY.with(Gesture::Press, ActionSpec::Sequence(&SEQ));
        let (mut emitter, mut delay, log) = mocks(Some(1));

        let result = block_on(ActionDispatcher::new(&config).fire(
            Gesture::Press,
            &mut emitter,
            &mut delay,
        ));

        assert_eq!(result, Err(OutputError::Io));
        assert_eq!(
            *log.lock().unwrap(),
            [Event::Sent(CTRL_C), Event::Slept(SEQUENCE_ITEM_DELAY_MS)]
        );
    }
}

use crate::log::LOGGER;
use std::sync::{
    Mutex,
    atomic::{AtomicUsize, Ordering},
};

static LOG_MODE_TEST_LOCK: Mutex<()> = Mutex::new(());
static FORMAT_SIDE_EFFECT: AtomicUsize = AtomicUsize::new(0);

fn side_effect_value() -> usize {
    FORMAT_SIDE_EFFECT.fetch_add(1, Ordering::Relaxed);
    42
}

#[test]
fn logging_macros_do_not_evaluate_format_args_when_disabled() {
    let _guard = LOG_MODE_TEST_LOCK.lock().expect("test lock");
    let was_debug = LOGGER.is_debug_enabled();
    LOGGER.disable_debug();
    FORMAT_SIDE_EFFECT.store(0, Ordering::Relaxed);

    crate::log_debug!("debug side effect {}", side_effect_value());
    crate::log_info!("info side effect {}", side_effect_value());
    crate::log_warn!("warn side effect {}", side_effect_value());
    crate::log_error!("error side effect {}", side_effect_value());
    assert_eq!(FORMAT_SIDE_EFFECT.load(Ordering::Relaxed), 0);
    assert!(!crate::debug_enabled!());

    if was_debug {
        LOGGER.enable_debug();
    }
}

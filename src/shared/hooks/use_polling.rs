use std::time::Duration;

use dioxus::prelude::*;

use crate::shared::logging::log_poll_tick;
use crate::shared::utils::sleep;

/// Call `tick` every `period` for as long as the component is mounted.
///
/// Ticks are fire-and-forget: a slow request does not delay the next tick.
pub fn use_polling(period: Duration, mut tick: impl FnMut() + 'static) {
    let tick = use_callback(move |_: ()| tick());

    use_future(move || async move {
        loop {
            sleep(period).await;
            log_poll_tick(period.as_millis());
            tick.call(());
        }
    });
}

use crate::platform::{now_ms, sleep_ms};
use crate::utils::format_grouped;
use dgex_core::config::{ANIMATION_FRAME_MS, DEFAULT_COUNTER_DURATION_MS};
use dgex_core::effects::CounterAnimation;
use dioxus::core::Task;
use dioxus::prelude::*;

/// Counts up from zero to `end` over `duration_ms`, then holds `end`.
///
/// Changing either prop cancels the running count and starts over.
#[component]
pub fn AnimatedNumber(
    end: u64,
    #[props(default = DEFAULT_COUNTER_DURATION_MS)] duration_ms: u64,
    #[props(default)] suffix: &'static str,
) -> Element {
    let mut counter = use_signal(|| CounterAnimation::new(end, duration_ms));
    let mut running = use_signal(|| None::<Task>);

    use_effect(use_reactive!(|(end, duration_ms)| {
        if let Some(task) = running.write().take() {
            task.cancel();
        }
        counter.write().restart(end, duration_ms);

        // Fixed-interval ticks stand in for requestAnimationFrame
        let task = spawn(async move {
            loop {
                let frame = counter.write().sample(now_ms());
                if frame.done {
                    break;
                }
                sleep_ms(ANIMATION_FRAME_MS).await;
            }
        });
        running.set(Some(task));
    }));

    rsx! {
        span { class: "dx-counter", "{format_grouped(counter.read().value())}{suffix}" }
    }
}

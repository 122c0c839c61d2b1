use chrono::Local;
use gloo_timers::callback::Interval;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub title: String,
}

fn clock_text() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

#[function_component(Navbar)]
pub fn navbar(props: &Props) -> Html {
    let current_time = use_state(clock_text);

    // Scoped ticker; dropping the handle on teardown cancels it.
    {
        let current_time = current_time.clone();
        use_effect_with((), move |_| {
            let interval = Interval::new(1_000, move || current_time.set(clock_text()));
            move || drop(interval)
        });
    }

    html! {
        <div class="navbar bg-primary text-primary-content shadow-sm z-40 sticky top-0">
            <div class="flex-1 px-4">
                <h1 class="text-xl font-bold tracking-tight" id="page-title">{ &props.title }</h1>
            </div>
            <div class="flex-none gap-4 px-4">
                <span class="badge badge-secondary">{"Live Data"}</span>
                <span class="text-sm opacity-90">{ &*current_time }</span>
            </div>
        </div>
    }
}

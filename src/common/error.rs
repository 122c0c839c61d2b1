use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
}

#[function_component(ErrorDisplay)]
pub fn error_display(props: &ErrorDisplayProps) -> Html {
    log::warn!("Displaying error to user: {}", props.message);

    html! {
        <div class="alert alert-error">
            <i class="fas fa-exclamation-circle text-2xl"></i>
            <div class="flex flex-col gap-1">
                <span class="font-semibold">{"Something went wrong"}</span>
                <span class="text-sm">{&props.message}</span>
            </div>
        </div>
    }
}

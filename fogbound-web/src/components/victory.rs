use yew::prelude::*;

/// Full-screen overlay shown when the exit is reached: final time plus a
/// restart button.
#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub final_time: AttrValue,
    pub on_play_again: Callback<MouseEvent>,
}

#[function_component(VictoryOverlay)]
pub fn victory_overlay(p: &Props) -> Html {
    let onclick = p.on_play_again.clone();
    html! {
        <div class="victory" role="dialog" aria-label="Victory">
            <h2>{ "You escaped!" }</h2>
            <p>{ "Your time: " }<span class="final-time">{ p.final_time.clone() }</span></p>
            <button {onclick}>{ "Play again" }</button>
        </div>
    }
}

use fogbound_game::Direction;
use yew::prelude::*;

/// On-screen directional pad for touch and mouse play. Emits the same
/// `Direction` the keyboard path produces; there is no synthetic key event.
#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub on_direction: Callback<Direction>,
}

#[function_component(DirectionPad)]
pub fn direction_pad(p: &Props) -> Html {
    let key = |dir: Direction, glyph: &str, label: &str| {
        let on_direction = p.on_direction.clone();
        let onclick = Callback::from(move |_: MouseEvent| on_direction.emit(dir));
        html! {
            <button {onclick} class="dpad-btn" aria-label={label.to_string()}>
                { glyph }
            </button>
        }
    };
    html! {
        <div class="dpad" role="group" aria-label="Movement controls">
            <div class="dpad-row">
                { key(Direction::Up, "\u{25b2}", "Move up") }
            </div>
            <div class="dpad-row">
                { key(Direction::Left, "\u{25c0}", "Move left") }
                { key(Direction::Down, "\u{25bc}", "Move down") }
                { key(Direction::Right, "\u{25b6}", "Move right") }
            </div>
        </div>
    }
}

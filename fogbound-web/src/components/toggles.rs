use yew::prelude::*;

use crate::prefs::DisplayPrefs;

/// Checkbox panel for the display toggles. Emits a whole new `DisplayPrefs`
/// per change; the app owns persistence and the portal-use side effect.
#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub prefs: DisplayPrefs,
    pub on_change: Callback<DisplayPrefs>,
}

#[function_component(TogglePanel)]
pub fn toggle_panel(p: &Props) -> Html {
    let toggle = |label: &str,
                  checked: bool,
                  apply: fn(DisplayPrefs, bool) -> DisplayPrefs| {
        let prefs = p.prefs;
        let on_change = p.on_change.clone();
        let onchange = Callback::from(move |_: Event| on_change.emit(apply(prefs, !checked)));
        html! {
            <label class="toggle">
                <input type="checkbox" {checked} {onchange} />
                { label }
            </label>
        }
    };
    html! {
        <div class="toggles" role="group" aria-label="Display options">
            { toggle("Fog of war", p.prefs.fog_of_war, |mut prefs, v| { prefs.fog_of_war = v; prefs }) }
            { toggle("Show exit", p.prefs.show_exit, |mut prefs, v| { prefs.show_exit = v; prefs }) }
            { toggle("Show path", p.prefs.show_path, |mut prefs, v| { prefs.show_path = v; prefs }) }
            { toggle("Show portals", p.prefs.show_portals, |mut prefs, v| { prefs.show_portals = v; prefs }) }
        </div>
    }
}

//! Screen mock - any screen of the flow, driven by controls

use super::framework::{ControlRegistryBuilder, MockPanel, Preset};
use crate::Route;
use chef_common::catalog::{cooking_steps, seed_recipes};
use chef_common::{DietStyle, FlowEvent, FlowState, Screen};
use chef_ui::stores::{AppState, AppStateStoreExt};
use chef_ui::ChefAppView;
use dioxus::prelude::*;
use tracing::debug;

/// Presets offered on the mock page and listed on the index
pub fn screen_presets() -> Vec<Preset> {
    vec![
        Preset::new("Camera"),
        Preset::new("Analysis").set_string("screen", "analysis"),
        Preset::new("Vegan pick")
            .set_string("screen", "analysis")
            .set_string("style", "vegan"),
        Preset::new("Recipes").set_string("screen", "recipes"),
        Preset::new("Cooking").set_string("screen", "cooking"),
        Preset::new("Last step")
            .set_string("screen", "cooking")
            .set_int("step", 4),
        Preset::new("Narrating")
            .set_string("screen", "cooking")
            .set_int("step", 2)
            .set_bool("narration", true),
        Preset::new("Share")
            .set_string("screen", "share")
            .set_int("step", 4),
        Preset::new("Profile").set_string("screen", "profile"),
    ]
}

/// Screens whose state depends on the step and narration controls
const STEP_SCREENS: &[&str] = &["cooking", "share"];

/// (id, name) for every seed recipe
fn recipe_options() -> Vec<(String, String)> {
    seed_recipes().into_iter().map(|r| (r.id, r.name)).collect()
}

/// Reach the requested screen by replaying real events on a fresh session,
/// so every mocked state is one the flow can actually produce.
pub fn mock_flow(
    screen: Screen,
    style: DietStyle,
    recipe_id: &str,
    step: usize,
    narration: bool,
) -> FlowState {
    let mut events = vec![FlowEvent::SelectStyle(style)];
    let start_cooking = [
        FlowEvent::Capture,
        FlowEvent::FindRecipes,
        FlowEvent::StartCooking {
            recipe_id: recipe_id.to_string(),
        },
    ];

    match screen {
        Screen::Camera => {}
        Screen::Profile => events.push(FlowEvent::OpenProfile),
        Screen::Analysis => events.push(FlowEvent::Capture),
        Screen::Recipes => events.extend([FlowEvent::Capture, FlowEvent::FindRecipes]),
        Screen::Cooking | Screen::Share => {
            events.extend(start_cooking);
            events.extend(std::iter::repeat(FlowEvent::NextStep).take(step));
            if narration {
                events.push(FlowEvent::ToggleNarration);
            }
            if screen == Screen::Share {
                events.push(FlowEvent::GenerateVideo);
            }
        }
    }

    FlowState::replay(events)
}

#[component]
pub fn ScreenMock(initial_state: Option<String>) -> Element {
    let mut cycle = use_signal(|| 0u32);

    let screen_options = Screen::ALL
        .iter()
        .map(|s| (s.as_str().to_string(), s.as_str().to_string()))
        .collect();
    let style_options = DietStyle::ALL
        .iter()
        .map(|s| (s.as_str().to_string(), s.label().to_string()))
        .collect();
    let last_step = cooking_steps().len().saturating_sub(1) as i32;

    let registry = ControlRegistryBuilder::new()
        .enum_control("screen", "Screen", "camera", screen_options)
        .enum_control("style", "Style", "normal", style_options)
        .doc("Highlight only; the recipe list is never filtered")
        .enum_control(
            "recipe",
            "Recipe",
            "1",
            recipe_options(),
        )
        .doc("Recipe picked on the recipes screen (cooking and share)")
        .int_control("step", "Step", 0, 0, last_step)
        .visible_when_any("screen", STEP_SCREENS)
        .bool_control("narration", "Narration", false)
        .visible_when_any("screen", STEP_SCREENS)
        .action("Restart", Callback::new(move |_| cycle += 1))
        .with_presets(screen_presets())
        .build(initial_state);

    registry.use_url_sync(|state| Route::MockScreen { state });

    let screen = registry
        .get_string("screen")
        .parse::<Screen>()
        .unwrap_or_default();
    let style = registry
        .get_string("style")
        .parse::<DietStyle>()
        .unwrap_or_default();
    let recipe_id = registry.get_string("recipe");
    let step = registry.get_int("step").max(0) as usize;
    let narration = registry.get_bool("narration");
    let cycle_val = cycle();

    let snapshot = mock_flow(screen, style, &recipe_id, step, narration);

    // Controls reset the store; clicks inside the screen then drive it as usual
    let app = use_store(AppState::default);
    let mut applied = use_signal(|| None::<(u32, FlowState)>);
    let key = (cycle_val, snapshot);
    if applied.peek().as_ref() != Some(&key) {
        app.flow().set(key.1.clone());
        applied.set(Some(key));
    }

    let recipe_name = seed_recipes()
        .into_iter()
        .find(|r| r.id == recipe_id)
        .map(|r| r.name)
        .unwrap_or_default();

    rsx! {
        MockPanel { title: format!("Screen · {screen} · {recipe_name}"), registry,
            ChefAppView {
                key: "{cycle_val}",
                flow: app.flow(),
                config: app.config(),
                on_event: move |event: FlowEvent| {
                    debug!("Mock event {:?}", event);
                    app.flow().write().apply(event);
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::framework::ControlValue;

    #[test]
    fn test_mock_flow_reaches_each_screen() {
        for screen in Screen::ALL {
            let state = mock_flow(screen, DietStyle::Normal, "1", 0, false);
            assert_eq!(state.screen(), screen);
        }
    }

    #[test]
    fn test_mock_flow_clamps_step() {
        let state = mock_flow(Screen::Cooking, DietStyle::Diet, "3", 99, false);
        assert_eq!(state.current_step(), state.last_step_index());
        assert_eq!(state.selected_style(), DietStyle::Diet);
        assert_eq!(state.selected_recipe().map(|r| r.id.as_str()), Some("3"));
    }

    #[test]
    fn test_mock_flow_share_keeps_recipe() {
        let state = mock_flow(Screen::Share, DietStyle::Normal, "2", 4, true);
        assert_eq!(state.screen(), Screen::Share);
        assert_eq!(state.selected_recipe().map(|r| r.id.as_str()), Some("2"));
        assert!(state.narration_playing());
    }

    #[test]
    fn test_recipe_options_follow_catalog() {
        let options = recipe_options();
        assert_eq!(options.len(), seed_recipes().len());
        assert!(options.iter().any(|(id, _)| id == "1"));
        assert!(options.iter().all(|(_, name)| !name.is_empty()));
    }

    #[test]
    fn test_step_screens_cover_every_step_dependent_screen() {
        for screen in Screen::ALL.into_iter().filter(Screen::needs_recipe) {
            assert!(STEP_SCREENS.contains(&screen.as_str()));
        }
    }

    #[test]
    fn test_share_preset_reaches_share_from_last_step() {
        let share = screen_presets()
            .into_iter()
            .find(|p| p.name == "Share")
            .unwrap();
        let step = match share.values.get("step") {
            Some(ControlValue::Int(step)) => *step as usize,
            other => panic!("share preset has no step: {:?}", other),
        };
        let state = mock_flow(Screen::Share, DietStyle::Normal, "1", step, false);
        assert_eq!(state.screen(), Screen::Share);
        assert_eq!(state.current_step(), state.last_step_index());
    }

    #[test]
    fn test_presets_use_known_screens() {
        let presets = screen_presets();
        assert!(presets.iter().any(|p| p.name == "Last step"));
        for preset in presets {
            if let Some(ControlValue::String(screen)) =
                preset.values.get("screen")
            {
                assert!(screen.parse::<Screen>().is_ok(), "{}", preset.name);
            }
        }
    }
}

//! Seesaw entry point
//!
//! Handles platform-specific initialization: DOM wiring on the web,
//! a scripted walkthrough of the level roster natively.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, HtmlInputElement, MouseEvent};

    use seesaw::render::CanvasScene;
    use seesaw::sim::controller::MSG_RETRY;
    use seesaw::sim::{InputDefaults, LevelController};
    use seesaw::{parse_non_negative_or, parse_number_or, Settings};

    /// Game instance holding all state
    struct Game {
        controller: LevelController,
        scene: Option<CanvasScene>,
        settings: Settings,
    }

    impl Game {
        fn new(scene: Option<CanvasScene>) -> Self {
            Self {
                controller: LevelController::new(),
                scene,
                settings: Settings::load(),
            }
        }

        /// Redraw the canvas from the live model
        fn redraw(&self) {
            if let Some(scene) = &self.scene {
                let balance = self.controller.balance();
                scene.draw(balance.weights(), balance.net_torque(), &self.settings);
            }
        }
    }

    fn document() -> Document {
        web_sys::window().expect("no window").document().expect("no document")
    }

    fn input_element(document: &Document, id: &str) -> Option<HtmlInputElement> {
        document.get_element_by_id(id)?.dyn_into().ok()
    }

    fn set_status(document: &Document, text: &str) {
        if let Some(el) = document.get_element_by_id("status") {
            el.set_text_content(Some(text));
        } else {
            log::warn!("status element missing");
        }
    }

    /// Push a level's field defaults and enabled state into the form
    fn apply_input_defaults(document: &Document, inputs: &InputDefaults) {
        if let Some(force) = input_element(document, "force") {
            force.set_disabled(!inputs.force_editable);
            force.set_value(&field_text(inputs.force_editable, inputs.default_force));
        }
        if let Some(radius) = input_element(document, "radius") {
            radius.set_disabled(!inputs.distance_editable);
            radius.set_value(&field_text(inputs.distance_editable, inputs.default_distance));
            sync_radius_label(document);
        }
    }

    /// Editable fields with a zero default start out blank, like the
    /// original form; pinned fields always show their value.
    fn field_text(editable: bool, default: f32) -> String {
        if editable && default == 0.0 {
            String::new()
        } else {
            format!("{default}")
        }
    }

    fn sync_radius_label(document: &Document) {
        if let (Some(label), Some(radius)) = (
            document.get_element_by_id("radiusVal"),
            input_element(document, "radius"),
        ) {
            label.set_text_content(Some(&radius.value()));
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Seesaw starting...");

        let document = document();

        let scene = document
            .get_element_by_id("gameCanvas")
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
            .as_ref()
            .and_then(CanvasScene::new);
        if scene.is_none() {
            log::warn!("game canvas unavailable; running without drawing");
        }

        let game = Rc::new(RefCell::new(Game::new(scene)));

        {
            let g = game.borrow();
            apply_input_defaults(&document, &g.controller.snapshot().inputs);
            g.redraw();
        }

        setup_add_weight(game.clone());
        setup_reset(game.clone());
        setup_radius_label_sync();

        log::info!("Seesaw running!");
    }

    fn setup_add_weight(game: Rc<RefCell<Game>>) {
        let document = document();
        let Some(btn) = document.get_element_by_id("addWeight") else {
            log::warn!("addWeight button missing");
            return;
        };

        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            let document = web_sys::window().unwrap().document().unwrap();
            let mut g = game.borrow_mut();

            // Pinned fields submit their configured value, whatever the
            // DOM happens to hold
            let inputs = g.controller.snapshot().inputs;
            let force = if inputs.force_editable {
                let raw = input_element(&document, "force").map(|e| e.value());
                parse_non_negative_or(&raw.unwrap_or_default(), 0.0)
            } else {
                inputs.default_force
            };
            let distance = if inputs.distance_editable {
                let raw = input_element(&document, "radius").map(|e| e.value());
                parse_number_or(&raw.unwrap_or_default(), 0.0)
            } else {
                inputs.default_distance
            };

            let result = g.controller.submit_weight(force, distance);
            set_status(&document, &result.message);

            // Advancing and the first-failure retry both re-seed the
            // level, and the form resets with it
            if result.level_advanced || result.message == MSG_RETRY {
                apply_input_defaults(&document, &g.controller.snapshot().inputs);
            }
            if result.level_advanced {
                log::info!("advanced to level {}", g.controller.snapshot().level_index);
            }
            if result.completed {
                log::info!("all levels complete");
            }

            g.redraw();
        });
        let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_reset(game: Rc<RefCell<Game>>) {
        let document = document();
        let Some(btn) = document.get_element_by_id("resetGame") else {
            log::warn!("resetGame button missing");
            return;
        };

        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            let document = web_sys::window().unwrap().document().unwrap();
            let mut g = game.borrow_mut();
            let snapshot = g.controller.reset();
            apply_input_defaults(&document, &snapshot.inputs);
            set_status(&document, "");
            g.redraw();
            log::info!("level {} restarted", snapshot.level_index);
        });
        let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// Keep the slider's value label in sync while the player drags it
    fn setup_radius_label_sync() {
        let document = document();
        let Some(radius) = document.get_element_by_id("radius") else {
            return;
        };

        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let document = web_sys::window().unwrap().document().unwrap();
            sync_radius_label(&document);
        });
        let _ = radius.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Seesaw (native) starting...");
    log::info!("Native mode has no canvas - running the scripted walkthrough");

    walkthrough();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Drive every built-in level through the public controller surface,
/// including one deliberate miss to show both failure messages.
#[cfg(not(target_arch = "wasm32"))]
fn walkthrough() {
    use seesaw::sim::LevelController;

    let mut controller = LevelController::new();
    let solutions = [(22.0, -5.0), (10.0, -5.0), (16.0, 5.0), (0.0, 0.0)];
    assert_eq!(solutions.len(), controller.level_count());

    // Two misses on level 0: gentle retry first, then the numeric reveal
    let miss = controller.submit_weight(5.0, -1.0);
    println!("miss #1: {}", miss.message);
    let miss = controller.submit_weight(5.0, -1.0);
    println!("miss #2: {}", miss.message);

    // The second miss stayed on the plank; restart the level before solving
    controller.reset();

    for (force, distance) in solutions {
        let inputs = controller.snapshot().inputs;
        let distance = if inputs.distance_editable {
            distance
        } else {
            inputs.default_distance
        };
        let result = controller.submit_weight(force, distance);
        println!(
            "submit {force} N @ {distance}: {} (left {:.1} Nm, right {:.1} Nm)",
            result.message, result.left_torque, result.right_torque
        );
        assert!(result.balanced);
    }

    println!("✓ walkthrough complete");
}

// src/main.rs

use nannou::prelude::*;

use triblocker::{config::Config, views::ChainView};

struct Model {
    view: ChainView,
    last_update: std::time::Instant,
}

fn main() {
    nannou::app(model).update(update).run();
}

fn model(app: &App) -> Model {
    let config = Config::load().expect("Failed to load config file");

    app.new_window()
        .title("triblocker 0.1.0")
        .size(config.window.width, config.window.height)
        .view(view)
        .mouse_pressed(mouse_pressed)
        .build()
        .unwrap();

    Model {
        view: ChainView::new(&config),
        last_update: std::time::Instant::now(),
    }
}

fn mouse_pressed(_app: &App, model: &mut Model, _button: MouseButton) {
    model.view.handle_tap();
}

fn update(_app: &App, model: &mut Model, _update: Update) {
    let now = std::time::Instant::now();
    let dt = (now - model.last_update).as_secs_f32();
    model.last_update = now;

    model.view.update(dt);
}

fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    model.view.draw(&draw, app.window_rect());
    draw.to_frame(app, &frame).unwrap();
}

//! Canvas 2D implementation of the game's drawing surface

use game_core::Surface;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Element, HtmlCanvasElement};

pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    high_score: Element,
}

impl CanvasSurface {
    pub fn new(canvas: &HtmlCanvasElement, high_score: Element) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("Canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| JsValue::from_str("2d context has unexpected type"))?;

        Ok(Self { ctx, high_score })
    }
}

impl Surface for CanvasSurface {
    type Error = JsValue;

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: &str) -> Result<(), JsValue> {
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_rect(x as f64, y as f64, w as f64, h as f64);
        Ok(())
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: &str) -> Result<(), JsValue> {
        self.ctx.set_fill_style_str(color);
        self.ctx.begin_path();
        self.ctx
            .arc(x as f64, y as f64, radius as f64, 0.0, std::f64::consts::TAU)?;
        self.ctx.close_path();
        self.ctx.fill();
        Ok(())
    }

    fn fill_text(
        &mut self,
        text: &str,
        x: f32,
        y: f32,
        color: &str,
        font: &str,
    ) -> Result<(), JsValue> {
        self.ctx.set_fill_style_str(color);
        self.ctx.set_font(font);
        self.ctx.fill_text(text, x as f64, y as f64)
    }

    fn set_high_score_label(&mut self, text: &str) -> Result<(), JsValue> {
        self.high_score.set_text_content(Some(text));
        Ok(())
    }
}

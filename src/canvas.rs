use folio_core::FrameOutput;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Draws particle-field frames onto a 2D canvas.
pub struct Painter {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl Painter {
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(Self { canvas, ctx })
    }

    pub fn canvas(&self) -> &web::HtmlCanvasElement {
        &self.canvas
    }

    pub fn draw(&self, frame: &FrameOutput) {
        let ctx = &self.ctx;
        ctx.clear_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );

        for dot in &frame.dots {
            ctx.begin_path();
            _ = ctx.arc(
                dot.center.x as f64,
                dot.center.y as f64,
                dot.radius.max(0.0) as f64,
                0.0,
                TAU,
            );
            ctx.set_fill_style_str(&dot.color.css());
            ctx.fill();
        }

        for stroke in &frame.strokes {
            ctx.begin_path();
            ctx.set_stroke_style_str(&stroke.color.css());
            ctx.set_line_width(stroke.width as f64);
            ctx.move_to(stroke.from.x as f64, stroke.from.y as f64);
            ctx.line_to(stroke.to.x as f64, stroke.to.y as f64);
            ctx.stroke();
        }
    }
}

use std::fs;
use std::io::Cursor;
use std::path::Path;

use image::{DynamicImage, ImageBuffer, ImageFormat, Rgb};
use plotters::prelude::*;

use crate::error::PhysioLogError;
use crate::trace::PhysioTrace;

#[derive(Clone, Debug)]
pub struct PlotStyle {
    pub width: u32,
    pub height: u32,
    pub background: RGBColor,
    pub line: RGBColor,
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            width: 1600,
            height: 320,
            background: WHITE,
            line: BLACK,
        }
    }
}

/// Renders the trace as a PNG: signal over time, x in seconds, y in µV,
/// caption set to the source file path.
pub fn render_trace_png(
    trace: &PhysioTrace,
    title: &str,
    style: &PlotStyle,
) -> Result<Vec<u8>, PhysioLogError> {
    if trace.is_empty() {
        return Err(PhysioLogError::Plot("trace has no samples".into()));
    }
    let mut buffer = vec![0u8; (style.width * style.height * 3) as usize];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, (style.width, style.height))
            .into_drawing_area();
        root.fill(&style.background)?;

        let t_max = trace.time.iter().copied().fold(0.0f64, f64::max);
        let y_min = trace.samples.iter().copied().fold(f64::INFINITY, f64::min);
        let y_max = trace
            .samples
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max);
        let y_bounds = if (y_max - y_min).abs() < f64::EPSILON {
            (y_min - 1.0, y_max + 1.0)
        } else {
            (y_min, y_max)
        };

        let mut chart = ChartBuilder::on(&root)
            .margin(10)
            .caption(title, ("sans-serif", 20).into_font())
            .set_label_area_size(LabelAreaPosition::Left, 60)
            .set_label_area_size(LabelAreaPosition::Bottom, 40)
            .build_cartesian_2d(0f64..t_max.max(f64::EPSILON), y_bounds.0..y_bounds.1)?;
        chart
            .configure_mesh()
            .x_desc("time [sec]")
            .y_desc("voltage [µV]")
            .light_line_style(&BLACK.mix(0.1))
            .draw()?;

        let series = trace
            .time
            .iter()
            .copied()
            .zip(trace.samples.iter().copied());
        chart.draw_series(LineSeries::new(series, &style.line))?;
        root.present()?;
    }
    encode_png(&buffer, style.width, style.height)
}

/// Convenience wrapper writing the PNG next to wherever the caller wants it.
pub fn save_trace_png(
    trace: &PhysioTrace,
    title: &str,
    style: &PlotStyle,
    output: impl AsRef<Path>,
) -> Result<(), PhysioLogError> {
    let png = render_trace_png(trace, title, style)?;
    fs::write(output, png)?;
    Ok(())
}

fn encode_png(buffer: &[u8], width: u32, height: u32) -> Result<Vec<u8>, PhysioLogError> {
    let image = ImageBuffer::<Rgb<u8>, _>::from_raw(width, height, buffer.to_vec())
        .ok_or_else(|| PhysioLogError::Plot("failed to allocate image buffer".into()))?;
    let mut output = Vec::new();
    let dynamic = DynamicImage::ImageRgb8(image);
    dynamic.write_to(&mut Cursor::new(&mut output), ImageFormat::Png)?;
    Ok(output)
}

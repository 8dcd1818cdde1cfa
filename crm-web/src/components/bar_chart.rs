use yew::{Html, Properties, function_component, html};

#[derive(Properties, PartialEq)]
pub struct BarChartProps {
    /// Label and value per bar, drawn in order.
    pub bars: Vec<(String, f64)>,
    /// Render bar values as money in tooltips.
    #[prop_or_default]
    pub currency: bool,
}

/// Height of a bar as a percentage of the tallest one.
fn bar_height(value: f64, peak: f64) -> f64 {
    if peak <= 0.0 || !value.is_finite() {
        return 0.0;
    }
    (value.max(0.0) / peak * 100.0).min(100.0)
}

/// Plain CSS bar chart.
#[function_component(BarChart)]
pub fn bar_chart(props: &BarChartProps) -> Html {
    let peak = props.bars.iter().map(|(_, value)| *value).fold(0.0_f64, f64::max);
    let format_value = |value: f64| {
        if props.currency {
            format!("${value:.2}")
        } else {
            format!("{value:.0}")
        }
    };

    html! {
        <div class="flex items-end gap-2 h-48 w-full">
            { for props.bars.iter().map(|(label, value)| html! {
                <div class="flex flex-col items-center justify-end flex-1 h-full" title={format_value(*value)}>
                    <div
                        class="w-full bg-primary rounded-t"
                        style={format!("height: {:.1}%", bar_height(*value, peak))}
                    ></div>
                    <span class="text-xs mt-1 truncate w-full text-center">{ label }</span>
                </div>
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_height_scales_to_peak() {
        assert!((bar_height(50.0, 200.0) - 25.0).abs() < f64::EPSILON);
        assert!((bar_height(200.0, 200.0) - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_bar_height_degenerate_inputs() {
        assert!(bar_height(10.0, 0.0).abs() < f64::EPSILON);
        assert!(bar_height(-5.0, 10.0).abs() < f64::EPSILON);
        assert!(bar_height(f64::NAN, 10.0).abs() < f64::EPSILON);
    }
}

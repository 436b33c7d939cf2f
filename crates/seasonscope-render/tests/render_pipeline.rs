use seasonscope_analysis::{preference_heatmap, seasonal_heatmap};
use seasonscope_core::{ChartConfig, Dispersion, OutputFormat, Palette};
use seasonscope_data::{Customer, Dataset, Order};
use seasonscope_render::output::format_heatmap;
use seasonscope_render::{render_svg, HeatmapStyle};

fn dataset() -> Dataset {
    let orders = [
        ("2018-01-15 10:00:00", "cama_mesa_banho", "A"),
        ("2018-07-10 10:00:00", "cama_mesa_banho", "B"),
        ("2018-08-10 10:00:00", "informatica_acessorios", "B"),
        ("2018-11-10 10:00:00", "informatica_acessorios", "A"),
        ("2018-11-11 10:00:00", "relogios_presentes", "A"),
    ]
    .iter()
    .map(|(ts, category, customer)| {
        Order::new(None, ts, Some((*category).into()), *customer).unwrap()
    })
    .collect();
    Dataset::from_parts(
        orders,
        vec![Customer::new("A", "SP"), Customer::new("B", "RJ")],
    )
}

#[test]
fn seasonal_heatmap_renders_to_svg() {
    let heatmap = seasonal_heatmap(&dataset(), "cama_mesa_banho").unwrap();
    let svg = render_svg(&heatmap, &HeatmapStyle::default()).unwrap();

    assert!(svg.contains("Seasonal Demand Patterns by State: cama_mesa_banho"));
    assert!(svg.contains("Relative Demand"));
    assert_eq!(svg.matches("100.00%").count(), 2);
    assert_eq!(svg.matches("0.00%").count(), 4);
}

#[test]
fn preference_heatmap_renders_with_configured_palette() {
    let heatmap = preference_heatmap(&dataset(), 2, Dispersion::Population).unwrap();
    let config = ChartConfig {
        palette: Palette::Viridis,
        width: 900,
        height: 700,
        ..ChartConfig::default()
    };
    let svg = render_svg(&heatmap, &HeatmapStyle::from(&config)).unwrap();

    assert!(svg.contains("Regional Product Category Preferences"));
    assert!(svg.contains("Product Category"));
    assert!(svg.contains("900"));
}

#[test]
fn text_output_lists_every_state() {
    let heatmap = seasonal_heatmap(&dataset(), "cama_mesa_banho").unwrap();
    let text = format_heatmap(&heatmap, OutputFormat::Text).unwrap();
    assert!(text.contains("RJ"));
    assert!(text.contains("SP"));
}

use figure_converter_core::{
    Cell, ConvertFigures, ConvertFiguresConfig, Payload, Pipeline, Resources, TransformError,
};
use serde_json::json;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn rasterize(format: &str, data: &Payload) -> Result<Payload, TransformError> {
    match data {
        Payload::Bytes(bytes) => Ok(Payload::Bytes(
            [format.as_bytes(), b"->png:".as_slice(), bytes.as_slice()].concat(),
        )),
        _ => Err(TransformError::conversion(format, "expected binary payload")),
    }
}

fn notebook_cells() -> Vec<Cell> {
    serde_json::from_value(json!([
        {"cell_type": "markdown", "source": "# Plots"},
        {
            "cell_type": "code",
            "outputs": [
                {
                    "output_type": "display_data",
                    "application/pdf": [37, 80, 68, 70],
                    "application/pdf_filename": "output_1_0.pdf",
                    "text/plain": "<Figure>"
                },
                {"output_type": "stream", "text": "done\n"}
            ]
        },
        {
            "cell_type": "code",
            "outputs": [
                {
                    "output_type": "display_data",
                    "application/pdf": [1, 2, 3],
                    "application/pdf_filename": "output_2_0.pdf",
                    "image/svg+xml": "<svg/>",
                    "image/svg+xml_filename": "output_2_0.svg"
                }
            ]
        }
    ]))
    .expect("valid cells")
}

#[test]
fn test_pipeline_converts_every_extracted_pdf() {
    init_logging();
    let mut pipeline = Pipeline::new();
    pipeline.register(Box::new(ConvertFigures::new(
        ConvertFiguresConfig::new("application/pdf", "image/png"),
        rasterize,
    )));

    let mut cells = notebook_cells();
    let mut resources: Resources = serde_json::from_value(json!({
        "figures": {"output_1_0.pdf": [37, 80, 68, 70]},
        "output_extension": "html"
    }))
    .expect("valid resources");

    pipeline.run(&mut cells, &mut resources).unwrap();

    assert_eq!(cells[1].outputs[0].filename("image/png"), Some("output_1_0.png"));
    assert_eq!(cells[1].outputs[1].filename("image/png"), None);
    assert_eq!(cells[2].outputs[0].filename("image/png"), Some("output_2_0.png"));

    let names: Vec<&str> = resources.figures.keys().map(String::as_str).collect();
    assert_eq!(names, vec!["output_1_0.pdf", "output_1_0.png", "output_2_0.png"]);
    assert_eq!(
        resources.figures["output_2_0.png"],
        Payload::Bytes(b"application/pdf->png:\x01\x02\x03".to_vec())
    );
    assert_eq!(resources.extra["output_extension"], json!("html"));

    let html_cell = serde_json::to_value(&cells[1]).unwrap();
    assert_eq!(html_cell["outputs"][0]["image/png_filename"], json!("output_1_0.png"));
    assert_eq!(html_cell["cell_type"], json!("code"));
}

#[test]
fn test_chained_stages_share_resources() {
    init_logging();
    let mut pipeline = Pipeline::new();
    pipeline.register(Box::new(ConvertFigures::new(
        ConvertFiguresConfig::new("application/pdf", "image/png"),
        rasterize,
    )));
    pipeline.register(Box::new(ConvertFigures::new(
        ConvertFiguresConfig::new("image/svg+xml", "application/pdf"),
        |_: &str, data: &Payload| -> Result<Payload, TransformError> {
            Ok(Payload::Bytes(data.as_bytes().to_vec()))
        },
    )));

    let mut cells = notebook_cells();
    let mut resources = Resources::new();
    pipeline.run(&mut cells, &mut resources).unwrap();

    // The svg output already carries application/pdf, so the second stage leaves it alone.
    assert!(!resources.has_figure("output_2_0.pdf"));
    assert_eq!(cells[2].outputs[0].filename("application/pdf"), Some("output_2_0.pdf"));
    assert_eq!(resources.figures.len(), 2);
}

#[test]
fn test_second_run_changes_nothing() {
    init_logging();
    let mut pipeline = Pipeline::new();
    pipeline.register(Box::new(ConvertFigures::new(
        ConvertFiguresConfig::new("application/pdf", "image/png"),
        rasterize,
    )));

    let mut cells = notebook_cells();
    let mut resources = Resources::new();
    pipeline.run(&mut cells, &mut resources).unwrap();
    let snapshot = (cells.clone(), resources.clone());

    pipeline.run(&mut cells, &mut resources).unwrap();
    assert_eq!((cells, resources), snapshot);
}

#[test]
fn test_unconfigured_stage_reports_cell() {
    init_logging();
    let mut pipeline = Pipeline::new();
    pipeline.register(Box::new(ConvertFigures::unconfigured(
        ConvertFiguresConfig::new("application/pdf", "image/png"),
    )));

    let mut cells = notebook_cells();
    let mut resources = Resources::new();
    let err = pipeline.run(&mut cells, &mut resources).unwrap_err();

    assert_eq!(
        err.to_string(),
        "stage convert_figures failed on cell 1: figure conversion from application/pdf is not implemented"
    );
    assert!(resources.figures.is_empty());
}

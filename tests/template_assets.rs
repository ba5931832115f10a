//! Loading and exporting shape-definition assets.

use unistroke_recognizer::{
    shapes, Point, RecognizeError, Recognizer, RecognizerParameters, TemplateDefinition,
};

const ASSET: &str = r#"[
    (label: "line", points: [(x: 0.0, y: 0.0), (x: 120.0, y: 40.0)]),
    (label: "vee", points: [(x: 0.0, y: 0.0), (x: 50.0, y: -100.0), (x: 100.0, y: 0.0)]),
]"#;

#[test]
fn loads_templates_from_ron() {
    let defs: Vec<TemplateDefinition> = ron::from_str(ASSET).unwrap();
    let recognizer = Recognizer::from_definitions(defs, RecognizerParameters::default()).unwrap();
    assert_eq!(recognizer.library().labels().collect::<Vec<_>>(), ["line", "vee"]);

    let stroke = [Point::new(10.0, 60.0), Point::new(30.0, 10.0), Point::new(50.0, 58.0)];
    let result = recognizer.recognize(&stroke).unwrap();
    assert_eq!(result.label, "vee");
}

#[test]
fn exported_templates_load_back() {
    let original = Recognizer::with_builtin_shapes(RecognizerParameters::default()).unwrap();
    let asset = ron::to_string(&original.library().definitions()).unwrap();

    let defs: Vec<TemplateDefinition> = ron::from_str(&asset).unwrap();
    let loaded = Recognizer::from_definitions(defs, RecognizerParameters::default()).unwrap();

    assert_eq!(
        loaded.library().labels().collect::<Vec<_>>(),
        original.library().labels().collect::<Vec<_>>()
    );
    assert_eq!(
        loaded.library().get(shapes::CIRCLE),
        original.library().get(shapes::CIRCLE)
    );
}

#[test]
fn malformed_template_is_reported() {
    let defs: Vec<TemplateDefinition> =
        ron::from_str(r#"[(label: "dot", points: [(x: 1.0, y: 1.0)])]"#).unwrap();
    let result = Recognizer::from_definitions(defs, RecognizerParameters::default());
    assert!(matches!(
        result,
        Err(RecognizeError::InvalidTemplate { points: 1, .. })
    ));
}

#[test]
fn parameters_deserialize_with_defaults() {
    let params: RecognizerParameters = ron::from_str("(num_points: 32)").unwrap();
    assert_eq!(params.num_points, 32);
    assert_eq!(params.square_size, RecognizerParameters::default().square_size);
}

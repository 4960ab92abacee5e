use lightdom::{
    demo, execute_on, Accept, ActiveState, AddClassCommand, BuildError, ClassAttributeStyle,
    MarkupRenderer, RenderOptions, State, TextVisitor, TracingReporter,
};
use tracing_subscriber::EnvFilter;

const CLASS_ATTRIBUTES_ENV: &str = "LIGHTDOM_CLASS_ATTRIBUTES";

fn main() -> Result<(), BuildError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let renderer = MarkupRenderer::new(RenderOptions::with_class_attributes(
        class_attributes_from_env(),
    ));
    let reporter = TracingReporter;

    let mut paragraph = demo::paragraph()?;
    let unordered_list = demo::unordered_list()?;

    execute_on(&mut paragraph, &mut AddClassCommand::new("highlight", reporter));
    paragraph.accept(&mut TextVisitor::new(reporter));
    ActiveState::new(reporter).handle(&paragraph);

    println!("{}", renderer.render(&paragraph));
    println!("{}", renderer.render(&unordered_list));

    Ok(())
}

fn class_attributes_from_env() -> ClassAttributeStyle {
    let Ok(raw) = std::env::var(CLASS_ATTRIBUTES_ENV) else {
        return ClassAttributeStyle::default();
    };

    raw.parse().unwrap_or_else(|_| {
        let fallback = ClassAttributeStyle::default();
        tracing::warn!(
            value = %raw,
            %fallback,
            "Unknown {CLASS_ATTRIBUTES_ENV}, falling back"
        );
        fallback
    })
}

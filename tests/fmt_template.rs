use corelog::fmt::{Placeholder, Segment, Template, Values};

#[test]
fn parses_known_placeholders_and_literals() {
    let template = Template::parse("{tag} {scope}: {msg}");
    assert_eq!(
        template.segments(),
        &[
            Segment::Placeholder(Placeholder::Tag),
            Segment::Literal(" ".to_string()),
            Segment::Placeholder(Placeholder::Scope),
            Segment::Literal(": ".to_string()),
            Segment::Placeholder(Placeholder::Msg),
        ]
    );
}

#[test]
fn unknown_placeholders_stay_literal() {
    let template = Template::parse("{icon} {msg} {");
    let line = template.render(&Values {
        msg: "hi",
        ..Values::default()
    });
    assert_eq!(line, "{icon} hi {");
}

#[test]
fn renders_every_placeholder() {
    let template = Template::parse("{timestamp}|{tag}|{level}|{scope}|{msg}|{app}");
    let line = template.render(&Values {
        timestamp: "12:00:00",
        tag: "[INFO]",
        level: "info",
        scope: "NET",
        msg: "up",
        app: "svc",
    });
    assert_eq!(line, "12:00:00|[INFO]|info|NET|up|svc");
}

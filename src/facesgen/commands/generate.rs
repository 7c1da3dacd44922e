use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult, ProjectPaths};
use crate::config::{GenConfig, OutputConfig};
use crate::error::{FacesgenError, Result};
use crate::model::Component;
use crate::templates;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use taglet::Renderer;

/// What every descriptor template sees.
#[derive(Serialize)]
struct DescriptorContext<'a> {
    components: &'a [Component],
    namespace: Option<&'a str>,
}

/// Renders every configured output from one catalog.
pub fn run(paths: &ProjectPaths, config: &GenConfig, catalog: &Catalog) -> Result<CmdResult> {
    let renderer = load_templates(paths, &config.outputs)?;
    let context = DescriptorContext {
        components: catalog.components(),
        namespace: config.namespace.as_deref(),
    };
    let output_dir = paths.resolve(&config.output_dir);

    let mut result = CmdResult::default();

    // nothing is written unless every output renders
    let mut rendered = Vec::with_capacity(config.outputs.len());
    for output in &config.outputs {
        if output.template == "taglib.xml" && context.namespace.is_none() {
            result.add_message(CmdMessage::warning(
                "No namespace configured; the taglib will not be usable from facelets",
            ));
        }
        let content = renderer.render(&output.template, &context)?;
        rendered.push((output, output_dir.join(&output.path), content));
    }

    let mut written = Vec::with_capacity(rendered.len());
    for (output, destination, content) in rendered {
        write_output(&destination, &content)?;

        tracing::info!(path = %destination.display(), template = %output.template, "processed");
        result.add_message(CmdMessage::success(format!(
            "Processed: {}",
            destination.display()
        )));
        written.push(destination);
    }

    Ok(result.with_written_paths(written))
}

fn load_templates(paths: &ProjectPaths, outputs: &[OutputConfig]) -> Result<Renderer> {
    let mut renderer = Renderer::plain();
    for output in outputs {
        if renderer.has_template(&output.template) {
            continue;
        }
        let source = match templates::builtin(&output.template) {
            Some(source) => source.to_string(),
            None => read_template(&paths.resolve(Path::new(&output.template)))?,
        };
        renderer.add_template(&output.template, &source)?;
    }
    Ok(renderer)
}

fn read_template(path: &Path) -> Result<String> {
    if !path.is_file() {
        return Err(FacesgenError::Config(format!(
            "Template is neither builtin nor a file: {}",
            path.display()
        )));
    }
    fs::read_to_string(path).map_err(FacesgenError::Io)
}

fn write_output(destination: &PathBuf, content: &str) -> Result<()> {
    if let Some(parent) = destination.parent() {
        fs::create_dir_all(parent).map_err(FacesgenError::Io)?;
    }
    let mut content = content.to_string();
    if !content.ends_with('\n') {
        content.push('\n');
    }
    fs::write(destination, content).map_err(FacesgenError::Io)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::build_catalog;
    use crate::commands::MessageLevel;
    use crate::merge::DEFAULT_MAX_HIERARCHY_DEPTH;
    use crate::model::{AttributeDecl, ComponentAnnotation, TypeDeclaration, TypeId};
    use crate::provider::memory::fixtures::ProviderFixture;
    use tempfile::TempDir;

    fn sample_catalog() -> Catalog {
        let mut provider = ProviderFixture::new()
            .with_base(
                "ui.UIInput",
                &[("rendered", AttributeDecl::new(false, "boolean", ""))],
            )
            .with_component(
                "ui.InputText",
                Some("ui.UIInput"),
                "",
                &[(
                    "value",
                    AttributeDecl::new(true, "java.lang.String", "Value <bound> & shown"),
                )],
            )
            .provider;
        provider.insert(
            TypeId::from("ui.Panel"),
            TypeDeclaration {
                simple_name: "Panel".into(),
                parent: None,
                component: Some(ComponentAnnotation::new("ui.Panel", "box")),
                description: Some("Groups children".into()),
            },
            None,
        );

        let types = vec![
            TypeId::from("ui.Panel"),
            TypeId::from("ui.InputText"),
            TypeId::from("ui.UIInput"),
        ];
        build_catalog(&provider, &types, DEFAULT_MAX_HIERARCHY_DEPTH).unwrap()
    }

    fn config_with_namespace() -> GenConfig {
        let mut config = GenConfig::default();
        config.namespace = Some("http://example.org/ui".into());
        config
    }

    #[test]
    fn writes_taglib() {
        let dir = TempDir::new().unwrap();
        let paths = ProjectPaths::new(dir.path());
        let config = config_with_namespace();

        let result = run(&paths, &config, &sample_catalog()).unwrap();
        assert_eq!(result.written_paths.len(), 1);
        assert!(!result.has_level(MessageLevel::Warning));

        let path = dir
            .path()
            .join("target/classes/META-INF/components.taglib.xml");
        assert_eq!(result.written_paths[0], path);
        let xml = fs::read_to_string(path).unwrap();

        assert!(xml.contains("<namespace>http://example.org/ui</namespace>"));
        assert!(xml.contains("<tag-name>inputText</tag-name>"));
        assert!(xml.contains("<component-type>ui.InputText</component-type>"));
        assert!(xml.contains("<description>Value &lt;bound&gt; &amp; shown</description>"));
        assert!(xml.contains("<required>true</required>"));
        assert!(xml.contains("<required>false</required>"));
        assert!(!xml.contains("True") && !xml.contains("False"));
        assert!(xml.contains("<name>rendered</name>"));
        assert!(xml.contains("<description>Groups children</description>"));
        assert!(xml.ends_with("</facelet-taglib>\n"));

        // components appear in catalog order
        let box_at = xml.find("<tag-name>box</tag-name>").unwrap();
        let input_at = xml.find("<tag-name>inputText</tag-name>").unwrap();
        assert!(box_at < input_at);
    }

    #[test]
    fn warns_without_namespace() {
        let dir = TempDir::new().unwrap();
        let result = run(
            &ProjectPaths::new(dir.path()),
            &GenConfig::default(),
            &sample_catalog(),
        )
        .unwrap();

        assert!(result.has_level(MessageLevel::Warning));
        let xml = fs::read_to_string(&result.written_paths[0]).unwrap();
        assert!(!xml.contains("<namespace>"));
    }

    #[test]
    fn renders_several_outputs_from_one_catalog() {
        let dir = TempDir::new().unwrap();
        let mut config = config_with_namespace();
        config.outputs.push(OutputConfig {
            template: "faces-config.xml".into(),
            path: PathBuf::from("META-INF/faces-config.xml"),
        });

        let result = run(&ProjectPaths::new(dir.path()), &config, &sample_catalog()).unwrap();
        assert_eq!(result.written_paths.len(), 2);

        let faces = fs::read_to_string(&result.written_paths[1]).unwrap();
        assert!(faces.contains("<component-class>ui.InputText</component-class>"));
        assert!(faces.contains("<component-type>ui.Panel</component-type>"));
    }

    #[test]
    fn custom_template_from_project() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("names.txt.j2"),
            "{% for c in components %}{{ c.name }}={{ c.attributes | length }}\n{% endfor %}",
        )
        .unwrap();

        let mut config = GenConfig::default();
        config.outputs = vec![OutputConfig {
            template: "names.txt.j2".into(),
            path: PathBuf::from("names.txt"),
        }];

        let result = run(&ProjectPaths::new(dir.path()), &config, &sample_catalog()).unwrap();
        let text = fs::read_to_string(&result.written_paths[0]).unwrap();
        assert_eq!(text, "box=0\ninputText=2\n");
    }

    #[test]
    fn render_failure_writes_nothing() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("broken.txt.j2"), "{{ no_such_function() }}").unwrap();

        let mut config = config_with_namespace();
        config.outputs.push(OutputConfig {
            template: "broken.txt.j2".into(),
            path: PathBuf::from("broken.txt"),
        });

        let err = run(&ProjectPaths::new(dir.path()), &config, &sample_catalog()).unwrap_err();
        assert!(matches!(err, FacesgenError::Template(_)));
        assert!(!dir
            .path()
            .join("target/classes/META-INF/components.taglib.xml")
            .exists());
        assert!(!dir.path().join("target/classes/broken.txt").exists());
    }

    #[test]
    fn missing_template_is_a_config_error() {
        let dir = TempDir::new().unwrap();
        let mut config = GenConfig::default();
        config.outputs = vec![OutputConfig {
            template: "nowhere.j2".into(),
            path: PathBuf::from("out.txt"),
        }];

        let err = run(&ProjectPaths::new(dir.path()), &config, &sample_catalog()).unwrap_err();
        assert!(matches!(err, FacesgenError::Config(_)));
    }
}

use std::path::Path;
use tracing::info;
use crate::catalog::Assessment;
use crate::cli::commands::ExportArgs;
use crate::cli::sources::assessment_from_args;
use crate::errors::AttackTreeError;
use crate::reporting::MermaidExporter;

pub fn handle_export(args: ExportArgs) -> Result<(), AttackTreeError> {
    let assessment = assessment_from_args(&args.source)?;
    let diagram = export_diagram(&assessment, &args.tree)?;

    match &args.output {
        Some(output) => {
            let path = Path::new(output);
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, format!("{}\n", diagram))?;
            info!(tree = %args.tree, path = %path.display(), "Diagram written");
        }
        None => println!("{}", diagram),
    }
    Ok(())
}

/// Mermaid diagram of the tree matching `query` by name or root id.
pub fn export_diagram(assessment: &Assessment, query: &str) -> Result<String, AttackTreeError> {
    let tree = assessment.find_tree(query).ok_or_else(|| {
        let known: Vec<&str> = assessment.trees().map(|t| t.name.as_str()).collect();
        AttackTreeError::UnknownTree(format!("'{}' (known trees: {})", query, known.join(", ")))
    })?;
    Ok(MermaidExporter::new(tree).export())
}

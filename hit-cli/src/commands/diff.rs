//! Command to compare the parameters of two (merged) sides.

use clap::Args;
use colored::Colorize;

use crate::error::CliError;
use crate::utils::{read_merged, GlobalOptions};
use hit::{explode, gather_params, Node, RenderOptions, Section};

/// Compare the leaf parameters of a left and a right side.
///
/// Each side is one positional file or a `--left`/`--right` file list
/// (merged in order). Every parameter falls into exactly one category:
/// removed left→right, added left→right, differing value, or common. The
/// command exits 1 when any difference exists.
#[derive(Args)]
pub struct DiffCommand {
    /// List every parameter instead of rendering synthetic trees
    #[arg(short = 'v')]
    pub verbose_listing: bool,

    /// Colorize the report
    #[arg(short = 'C', long = "color")]
    pub color: bool,

    /// Show only the parameters common to both sides
    #[arg(long)]
    pub common: bool,

    /// Left-hand inputs (mutually exclusive with positional files)
    #[arg(long, value_name = "FILE", num_args = 1..)]
    pub left: Vec<String>,

    /// Right-hand inputs (mutually exclusive with positional files)
    #[arg(long, value_name = "FILE", num_args = 1..)]
    pub right: Vec<String>,

    /// Left and right input files
    #[arg(value_name = "LEFT RIGHT", num_args = 0..=2)]
    pub files: Vec<String>,
}

impl DiffCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<i32, CliError> {
        let (left_files, right_files) = self.sides()?;

        colored::control::set_override(self.color);

        let left = read_merged(&left_files)?;
        let right = read_merged(&right_files)?;

        println!("Left hand side:");
        for file in &left_files {
            println!("    {file}");
        }
        println!("\nRight hand side:");
        for file in &right_files {
            println!("    {file}");
        }
        println!();

        let left_params = gather_params(&left);
        let right_params = gather_params(&right);

        let mut differing = String::new();
        let mut removed_lines = String::new();
        let mut added_lines = String::new();
        let mut removed_root = Section::new("");
        let mut added_root = Section::new("");
        let mut common_root = Section::new("");

        // params on the left but not on the right, and value changes
        for (path, lnode) in &left_params {
            match right_params.get(path) {
                None => {
                    removed_lines.push_str(&format!(
                        "{} ({}:{}) is missing on the right.\n",
                        path.red(),
                        lnode.filename().blue(),
                        lnode.line(),
                    ));
                    removed_root.add_child(lnode.clone_renamed(path));
                }
                Some(rnode) => {
                    let lval = lnode.str_val()?;
                    let rval = rnode.str_val()?;
                    if lval == rval {
                        common_root.add_child(lnode.clone_renamed(path));
                    } else {
                        let separator = if lval.len() > 40 { "\n      " } else { " " };
                        differing.push_str(&format!(
                            "    {} ({}:{}) has differing values\n      '{}' ->{}'{}'\n",
                            path.yellow(),
                            lnode.filename().blue(),
                            lnode.line(),
                            lval.red(),
                            separator,
                            rval.green(),
                        ));
                    }
                }
            }
        }

        // params on the right but not on the left
        for (path, rnode) in &right_params {
            if !left_params.contains_key(path) {
                added_lines.push_str(&format!(
                    "{} ({}:{}) is missing on the left.\n",
                    path.green(),
                    rnode.filename().blue(),
                    rnode.line(),
                ));
                added_root.add_child(rnode.clone_renamed(path));
            }
        }

        if self.common {
            println!("Common parameters:");
            println!("{}\n", render_tree(common_root));
            return Ok(0);
        }

        let has_differences =
            !removed_lines.is_empty() || !added_lines.is_empty() || !differing.is_empty();

        if !removed_lines.is_empty() {
            println!("Parameters removed left -> right:");
            if self.verbose_listing {
                println!("{removed_lines}");
            } else {
                println!("{}\n", render_tree(removed_root).red());
            }
        }

        if !added_lines.is_empty() {
            println!("Parameters added left -> right:");
            if self.verbose_listing {
                println!("{added_lines}");
            } else {
                println!("{}\n", render_tree(added_root).green());
            }
        }

        if !differing.is_empty() {
            println!("Parameters with differing values:\n");
            println!("{differing}");
        }

        Ok(i32::from(has_differences))
    }

    /// Resolve the left/right input lists from the two accepted spellings.
    fn sides(&self) -> Result<(Vec<String>, Vec<String>), CliError> {
        let usage = "usage: hit diff <left> <right>  or  hit diff --left <files>... --right <files>...";
        if self.left.is_empty() != self.right.is_empty() {
            return Err(CliError::Usage(usage.to_string()));
        }
        if !self.left.is_empty() {
            if !self.files.is_empty() {
                return Err(CliError::Usage(usage.to_string()));
            }
            return Ok((self.left.clone(), self.right.clone()));
        }
        if self.files.len() != 2 {
            return Err(CliError::Usage(usage.to_string()));
        }
        Ok((vec![self.files[0].clone()], vec![self.files[1].clone()]))
    }
}

/// Explode a synthetic tree of absolute-path clones and render it as an
/// indented report block.
fn render_tree(root: Section) -> String {
    let mut node = Node::Section(root);
    explode(&mut node);
    let rendered = node.render_with(&RenderOptions::at_level(1));
    rendered.trim_end_matches('\n').to_string()
}

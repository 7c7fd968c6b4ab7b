use serde::Deserialize;

/// Lookup names of the transformation strategies a configuration wires together. The engine
/// resolves them; nothing here knows how they work.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoaderNames {
  pub script: String,
  pub style: String,
  pub css: String,
  pub postcss: String,
  pub sass: String,
  pub minimizer: String,
}

impl Default for LoaderNames {
  fn default() -> Self {
    Self {
      script: "buble-loader".to_string(),
      style: "style-loader".to_string(),
      css: "css-loader".to_string(),
      postcss: "postcss-loader".to_string(),
      sass: "sass-loader".to_string(),
      minimizer: "terser".to_string(),
    }
  }
}

use std::sync::LazyLock;

use regex::Regex;
use serde_json::json;
use taskpack_common::{
  BuildMode, BundlerConfig, ChunkSelection, CompressOptions, Condition, Devtool, ESTarget,
  LoaderNames, LoaderUse, MangleOptions, MinimizerOptions, MinimizerOutputOptions, ModuleConfig,
  ModuleRule, NormalizedTaskOptions, Optimization, OutputConfig, ParseOptions, ParserOptions,
  SplitChunks, TransformRule,
};
use taskpack_utils::parallelism::minify_workers;

static SCRIPT_FILES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\.jsx?$").unwrap());
static STYLE_FILES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\.s?css$").unwrap());
static DEPENDENCY_TREES: LazyLock<Regex> = LazyLock::new(|| Regex::new("node_modules").unwrap());

/// [`compose_config`] with the default loader lookup names.
pub fn compose(task: &NormalizedTaskOptions, is_production: bool) -> BundlerConfig {
  compose_config(task, is_production, &LoaderNames::default())
}

/// Builds the complete bundler configuration of a task. Pure: the same task and flags always
/// produce the same configuration.
pub fn compose_config(
  task: &NormalizedTaskOptions,
  is_production: bool,
  loaders: &LoaderNames,
) -> BundlerConfig {
  let source_maps = task.source_maps_enabled(is_production);
  let compressed = task.is_compressed(is_production);

  // Never feed third-party code or our own output back through the loaders.
  let exclude = vec![
    Condition::Pattern(DEPENDENCY_TREES.clone()),
    Condition::Directory(task.paths.dir_to.clone()),
  ];

  BundlerConfig {
    entry: task.paths.entry(),
    output: OutputConfig {
      path: task.paths.dir_to.clone(),
      filename: task.paths.filename_to.clone(),
      pathinfo: !is_production,
    },
    module: ModuleConfig {
      rules: vec![
        ModuleRule::Parser { parser: ParserOptions { require_ensure: false } },
        script_rule(exclude.clone(), loaders),
        style_rule(exclude, source_maps, loaders),
      ],
    },
    devtool: Devtool::new(source_maps, task.source_map_kind),
    // A `full` build in production still runs in development mode.
    mode: if compressed { BuildMode::Production } else { BuildMode::Development },
    optimization: compressed.then(|| optimization(loaders)),
  }
}

fn script_rule(exclude: Vec<Condition>, loaders: &LoaderNames) -> ModuleRule {
  ModuleRule::Transform(TransformRule {
    test: Condition::Pattern(SCRIPT_FILES.clone()),
    exclude,
    loaders: vec![LoaderUse::new(&loaders.script)],
  })
}

fn style_rule(exclude: Vec<Condition>, source_maps: bool, loaders: &LoaderNames) -> ModuleRule {
  ModuleRule::Transform(TransformRule {
    test: Condition::Pattern(STYLE_FILES.clone()),
    exclude,
    loaders: vec![
      LoaderUse::new(&loaders.style),
      LoaderUse::with_options(&loaders.css, json!({ "sourceMap": source_maps, "importLoaders": 1 })),
      LoaderUse::with_options(
        &loaders.postcss,
        json!({
          "ident": "postcss",
          "plugins": [
            "postcss-flexbugs-fixes",
            ["postcss-preset-env", {
              "autoprefixer": { "flexbox": "no-2009", "browsers": ["> 1%", "last 3 versions"] },
              "stage": 3
            }]
          ],
          "sourceMap": source_maps
        }),
      ),
      LoaderUse::with_options(&loaders.sass, json!({ "sourceMap": source_maps })),
    ],
  })
}

fn optimization(loaders: &LoaderNames) -> Optimization {
  Optimization {
    minimize: true,
    minimizer: vec![MinimizerOptions {
      name: loaders.minimizer.clone(),
      // Parse ES2017 input, but only apply transforms whose output is still valid ES5.
      parse: ParseOptions { ecma: ESTarget::Es2017 },
      compress: CompressOptions {
        ecma: ESTarget::Es5,
        warnings: false,
        comparisons: false,
        inline: 2,
      },
      mangle: MangleOptions { safari10: true },
      output: MinimizerOutputOptions { ecma: ESTarget::Es5, comments: false, ascii_only: true },
      parallel: minify_workers(),
      cache: true,
      source_map: false,
    }],
    split_chunks: SplitChunks { chunks: ChunkSelection::Async, name: None },
  }
}

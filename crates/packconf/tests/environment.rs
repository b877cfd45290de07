use packconf::{BundlerConfig, ConfigComposer, EnvironmentSet, Mode};
use serde_json::json;

fn config(raw: serde_json::Value) -> BundlerConfig {
  serde_json::from_value(raw).unwrap()
}

fn demo_set() -> EnvironmentSet {
  EnvironmentSet {
    common: config(json!({
      "entry": "./src/index.js",
      "plugins": [
        { "name": "HtmlWebpackPlugin", "options": { "template": "./src/template.html" } }
      ],
      "module": {
        "rules": [
          { "test": "\\.scss$", "use": ["style-loader", "css-loader", "sass-loader"] },
          { "test": "\\.html$", "use": ["html-loader"] }
        ]
      }
    })),
    development: config(json!({
      "mode": "development",
      "output": { "filename": "main.js", "path": "dist" },
      "devServer": { "devMiddleware": { "writeToDisk": true } }
    })),
    production: config(json!({
      "mode": "production",
      "output": {
        "filename": "main.[hash].js",
        "path": "dist",
        "assetModuleFilename": "./imgs/[name].[hash].[ext]"
      }
    })),
  }
}

#[test]
fn resolves_development() {
  let composer = ConfigComposer::default();
  let merged = demo_set().resolve(&composer, Mode::Development).unwrap();

  assert_eq!(merged.mode, Some(Mode::Development));
  assert_eq!(merged.entry, Some("./src/index.js".into()));
  assert_eq!(merged.output.as_ref().unwrap().filename.as_deref(), Some("main.js"));
  assert_eq!(merged.module.as_ref().unwrap().rules.len(), 2);
  let dev_server = merged.dev_server.as_ref().unwrap();
  assert_eq!(dev_server.dev_middleware.as_ref().unwrap().write_to_disk, Some(true));
}

#[test]
fn resolves_production() {
  let composer = ConfigComposer::default();
  let merged = demo_set().resolve(&composer, Mode::Production).unwrap();

  assert_eq!(merged.mode, Some(Mode::Production));
  let output = merged.output.as_ref().unwrap();
  assert_eq!(output.filename.as_deref(), Some("main.[hash].js"));
  assert_eq!(output.asset_module_filename.as_deref(), Some("./imgs/[name].[hash].[ext]"));
  assert_eq!(merged.dev_server, None);
  // Common plugins survive untouched in both environments.
  assert_eq!(merged.plugins.as_ref().unwrap().len(), 1);
}

#[test]
fn stamps_mode_when_overlay_leaves_it_unset() {
  let set = EnvironmentSet {
    common: config(json!({ "entry": "./index.js" })),
    development: BundlerConfig::default(),
    production: config(json!({ "output": { "filename": "main.[hash].js" } })),
  };

  let composer = ConfigComposer::default();
  assert_eq!(set.resolve(&composer, Mode::Development).unwrap().mode, Some(Mode::Development));
  assert_eq!(set.resolve(&composer, Mode::Production).unwrap().mode, Some(Mode::Production));
}

#[test]
fn overlay_mode_beats_the_requested_stamp() {
  let set = EnvironmentSet {
    common: config(json!({ "mode": "development" })),
    development: BundlerConfig::default(),
    production: config(json!({ "mode": "production" })),
  };

  let composer = ConfigComposer::default();
  // Development overlay is empty, so the common mode survives.
  assert_eq!(set.resolve(&composer, Mode::Development).unwrap().mode, Some(Mode::Development));
  // Production overlay overrides the common mode at the leaf.
  assert_eq!(set.resolve(&composer, Mode::Production).unwrap().mode, Some(Mode::Production));
}

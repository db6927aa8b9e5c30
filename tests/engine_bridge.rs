use std::cell::RefCell;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::rc::Rc;

use maskbench::ctx::Ctx;
use maskbench::engine::{ScriptEngine, ScriptOutput};
use maskbench::error::EvalError;
use maskbench::pipeline::Pipeline;
use maskbench::pipeline::stage5_partition::Stage5Partition;

#[derive(Debug, Clone, Default)]
struct MockEngine {
    scripts: Rc<RefCell<Vec<String>>>,
    drop_outputs: bool,
    garbage_outputs: bool,
}

impl ScriptEngine for MockEngine {
    fn run_script(&mut self, language: &str, script: &str) -> anyhow::Result<ScriptOutput> {
        assert_eq!(language, "BeanShell");
        self.scripts.borrow_mut().push(script.to_string());
        if self.drop_outputs {
            return Ok(ScriptOutput::default());
        }
        let mut outputs = BTreeMap::new();
        if script.contains("#@output String VRand") {
            let value = if self.garbage_outputs { "oops" } else { "0.91" };
            outputs.insert("VRand".to_string(), value.to_string());
        } else {
            outputs.insert("VInfo".to_string(), "0.87".to_string());
        }
        Ok(ScriptOutput::new(outputs))
    }
}

fn staged_ctx(engine: MockEngine) -> Ctx {
    let mut ctx = Ctx::new(
        PathBuf::from("results"),
        PathBuf::from("ground"),
        PathBuf::from("out"),
        false,
        "png".to_string(),
        false,
        false,
    );
    ctx.ground_tif = Some(PathBuf::from("/scratch/Ground.tif"));
    ctx.staged = vec![
        ("fcn".to_string(), PathBuf::from("/scratch/fcn.tif")),
        ("unet".to_string(), PathBuf::from("/scratch/unet.tif")),
    ];
    ctx.engine = Some(Box::new(engine));
    ctx
}

#[test]
fn partition_stage_collects_both_scores_per_method() {
    let engine = MockEngine::default();
    let scripts = engine.scripts.clone();
    let mut ctx = staged_ctx(engine);

    let pipeline = Pipeline::new(vec![Box::new(Stage5Partition::new())]);
    pipeline.run(&mut ctx).unwrap();

    assert_eq!(ctx.partition.len(), 2);
    let unet = &ctx.partition["unet"];
    assert_eq!(unet.vrand, 0.91);
    assert_eq!(unet.vinfo, 0.87);

    // Two scripts per method: VRand first, then VInfo.
    let scripts = scripts.borrow();
    assert_eq!(scripts.len(), 4);
    assert!(scripts[0].contains("#@output String VRand"));
    assert!(scripts[1].contains("#@output String VInfo"));
}

#[test]
fn scripts_reference_the_methods_own_staged_stack() {
    let engine = MockEngine::default();
    let scripts = engine.scripts.clone();
    let mut ctx = staged_ctx(engine);

    let pipeline = Pipeline::new(vec![Box::new(Stage5Partition::new())]);
    pipeline.run(&mut ctx).unwrap();

    let scripts = scripts.borrow();
    for script in &scripts[..2] {
        assert!(script.contains("/scratch/Ground.tif"));
        assert!(script.contains("/scratch/fcn.tif"));
        assert!(!script.contains("unet.tif"));
    }
    for script in &scripts[2..] {
        assert!(script.contains("/scratch/unet.tif"));
        assert!(!script.contains("fcn.tif"));
    }
}

#[test]
fn missing_output_variable_is_an_engine_invocation_error() {
    let mut ctx = staged_ctx(MockEngine {
        drop_outputs: true,
        ..MockEngine::default()
    });

    let pipeline = Pipeline::new(vec![Box::new(Stage5Partition::new())]);
    let err = pipeline.run(&mut ctx).unwrap_err();
    match err.downcast_ref::<EvalError>() {
        Some(EvalError::EngineInvocation { method, metric, .. }) => {
            assert_eq!(method, "fcn");
            assert_eq!(metric, "VRand");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn unparsable_output_is_an_engine_invocation_error() {
    let mut ctx = staged_ctx(MockEngine {
        garbage_outputs: true,
        ..MockEngine::default()
    });

    let pipeline = Pipeline::new(vec![Box::new(Stage5Partition::new())]);
    let err = pipeline.run(&mut ctx).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<EvalError>(),
        Some(EvalError::EngineInvocation { .. })
    ));
}

#[test]
fn console_output_parsing_skips_log_noise() {
    let console = "\
[INFO] launching engine\n\
status: ok = fine\n\
VRand = 0.95123\n\
VInfo= 0.7\n\
done\n";
    let output = ScriptOutput::from_console(console);
    assert_eq!(output.output("VRand"), Some("0.95123"));
    assert_eq!(output.output("VInfo"), Some("0.7"));
    // 'status: ok' is not a bare identifier.
    assert_eq!(output.output("status: ok"), None);
}

#[test]
fn windows_paths_are_normalized_in_scripts() {
    use maskbench::engine::script::engine_path;
    let path = PathBuf::from(r"C:\Users\bench\scratch\Ground.tif");
    assert_eq!(
        engine_path(&path, true),
        "C:/Users/bench/scratch/Ground.tif"
    );
    let unix = PathBuf::from("/tmp/scratch/Ground.tif");
    assert_eq!(engine_path(&unix, false), "/tmp/scratch/Ground.tif");
}

//! BeanShell script bodies submitted to the engine.
//!
//! Each script opens the duplicated ground-truth stack and one method's
//! duplicated stack from the scratch area, runs the matching estimator over
//! the thinning threshold sweep [0.0, 1.0] step 0.1, and binds the maximal
//! score to a named output variable.

use std::path::Path;

pub const LANGUAGE: &str = "BeanShell";

pub const VRAND_OUTPUT: &str = "VRand";
pub const VINFO_OUTPUT: &str = "VInfo";

/// File name of the staged ground-truth stack inside the scratch directory.
pub const GROUND_STACK: &str = "Ground.tif";

/// File name of a method's staged stack inside the scratch directory.
///
/// The method name is the on-disk identifier, which is what prevents
/// cross-method collisions in the scratch area.
pub fn method_stack(method: &str) -> String {
    format!("{method}.tif")
}

/// Render a path for script text, normalizing separators to `/` when the
/// engine runs on Windows.
pub fn engine_path(path: &Path, windows: bool) -> String {
    let text = path.display().to_string();
    if windows {
        text.replace('\\', "/")
    } else {
        text
    }
}

pub fn rand_error_script(ground: &str, proposed: &str) -> String {
    format!(
        "import ij.IJ;\n\
         originalLabels = IJ.openImage(\"{ground}\");\n\
         proposedLabels = IJ.openImage(\"{proposed}\");\n\
         import trainableSegmentation.metrics.*;\n\
         #@output String VRand\n\
         metric = new RandError( originalLabels, proposedLabels );\n\
         maxThres = 1.0;\n\
         maxScore = metric.getMaximalVRandAfterThinning( 0.0, maxThres, 0.1, true );\n\
         VRand = maxScore;\n"
    )
}

pub fn variation_of_information_script(ground: &str, proposed: &str) -> String {
    format!(
        "import ij.IJ;\n\
         originalLabels = IJ.openImage(\"{ground}\");\n\
         proposedLabels = IJ.openImage(\"{proposed}\");\n\
         import trainableSegmentation.metrics.*;\n\
         #@output String VInfo\n\
         metric = new VariationOfInformation( originalLabels, proposedLabels );\n\
         maxThres = 1.0;\n\
         maxScore = metric.getMaximalVInfoAfterThinning( 0.0, maxThres, 0.1 );\n\
         VInfo = maxScore;\n"
    )
}

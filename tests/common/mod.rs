use std::fs;
use std::path::{Path, PathBuf};

/// An application file carrying every signature the verification looks for.
pub const FULL_APP: &str = r#"<!DOCTYPE html>
<html>
<body>
<button id="runTestsBtn">Run Tests</button>
<script>
const TECHNIQUE_LIBRARY = { "total_techniques": 50, techniques: [] };
const DISCOVERY_QUESTIONS = { phase1: [], phase2: [], phase3: [], phase4: [], phase5: [] };
class StateManager { constructor() { this.questions = {}; } }
class TabNavigator { switchTab(n) {} }
class DataManager { exportToJSON() {} importFromJSON(s) {} }
class SummaryGenerator { generateSummary() {} extractKeyFindings() {} }
class ViewModeManager { setMode(m) {} getMode() {} }
class TechniqueRecommender { recommend() {} }
class TestFramework { test(name, fn) {} runAll() {} }
const testFramework = new TestFramework();
testFramework.test('All Manager Classes Initialize', () => {});
testFramework.test('Export Functionality Available', () => {});
</script>
</body>
</html>
"#;

pub fn write_app(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("write fixture");
    path
}

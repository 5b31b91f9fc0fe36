use bridge_deploy::StepPlan;
use clap::Parser;
use eyre::Result;

#[derive(Parser, Debug)]
pub struct PlansArgs {}

impl PlansArgs {
    pub async fn run(self) -> Result<()> {
        println!("Plan presets");
        println!("============");
        println!();

        for name in StepPlan::PRESETS {
            let plan = StepPlan::preset(name)?;
            let steps = plan
                .steps()
                .iter()
                .map(|step| format!("{} ({})", step.name(), step.id()))
                .collect::<Vec<_>>()
                .join(" -> ");
            println!("  {name}: {steps}");
        }

        println!();
        println!("Explicit step ids can be passed with `run --steps`, e.g. --steps 1,2,3,4,5");
        Ok(())
    }
}

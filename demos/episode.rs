//! Drive one episode against a local backend.
//!
//! Start the TeamsClone backend on localhost:3001, then:
//! `cargo run --example episode`

use teamsim_client::{Action, EnvClient, Observation};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = EnvClient::default();

    let snapshot = client.reset()?;
    let obs = Observation::new(&snapshot);
    println!(
        "reset: agent {} in channel {:?}",
        obs.agent_id(),
        obs.current_channel_id()
    );

    let catalog = client.actions()?;
    println!("available actions: {:?}", catalog.actions);
    println!("channels: {:?}", catalog.channels);

    let mut total_reward = 0.0;
    for step in 0..20 {
        let obs = Observation::new(&client.state()?);

        let action = if obs.has_unread_mentions() {
            Action::send_message("on it!")
        } else if step % 5 == 4 {
            // Wander into another channel now and then.
            match obs.all_channel_ids().into_iter().flatten().last() {
                Some(channel_id) => Action::switch_channel(&channel_id),
                None => Action::send_message("anyone here?"),
            }
        } else {
            Action::send_message(&format!("status update {step}"))
        };

        let result = client.step(&action)?;
        total_reward += result.reward;
        println!(
            "step {step:2}: {:<14} reward {:+.2} (total {:+.2})",
            action.kind, result.reward, total_reward
        );

        if result.done {
            println!("episode finished: {}", result.info);
            break;
        }
    }

    let stats = client.stats()?;
    println!("episode stats: {stats}");
    Ok(())
}

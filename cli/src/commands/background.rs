use color_eyre::eyre::Result;
use glaze_prefs::validation::{
    validate_angle, validate_color, validate_color_list, validate_preset_key, ValidationError,
};
use glaze_prefs::{
    BackgroundPatch, BackgroundStore, DocumentSurface, PresetCatalog, Preferences,
    CUSTOM_PRESET_KEY,
};

use super::print_json;
use crate::cli::{BackgroundArgs, BackgroundCommands};

pub fn run<D: DocumentSurface>(
    prefs: &mut Preferences<D>,
    command: Option<BackgroundCommands>,
    compact: bool,
) -> Result<()> {
    let store = prefs.background_mut()?;

    match command.unwrap_or(BackgroundCommands::Show { resolved: false }) {
        BackgroundCommands::Show { resolved: false } => print_json(store.state(), compact),
        BackgroundCommands::Show { resolved: true } => print_json(&store.active(), compact),
        BackgroundCommands::Presets => {
            print_presets(store);
            Ok(())
        }
        BackgroundCommands::Set(args) => {
            let patch = build_patch(args, store.presets())?;
            if patch.is_empty() {
                println!("Nothing to change. See `glaze background set --help`.");
                return Ok(());
            }
            store.update_settings(patch);
            print_summary(store);
            Ok(())
        }
        BackgroundCommands::Reset => {
            store.reset_to_defaults();
            println!("Background reset to defaults.");
            print_summary(store);
            Ok(())
        }
    }
}

/// Turns CLI flags into a patch, rejecting colors and presets a dashboard
/// could not render.
pub fn build_patch(
    args: BackgroundArgs,
    presets: &PresetCatalog,
) -> std::result::Result<BackgroundPatch, ValidationError> {
    let custom_gradient_sets = if args.custom_sets.is_empty() {
        None
    } else {
        let sets = args
            .custom_sets
            .iter()
            .map(|set| {
                let colors: Vec<String> = set.split(',').map(|c| c.trim().to_string()).collect();
                validate_color_list("custom-set", &colors)
            })
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Some(sets)
    };

    if let Some(key) = args.preset.as_deref() {
        validate_preset_key(presets, key)?;
    }

    Ok(BackgroundPatch {
        mode: args.mode.map(Into::into),
        video_url: args.video_url,
        image_url: args.image_url,
        color: args
            .color
            .as_deref()
            .map(|c| validate_color("color", c))
            .transpose()?,
        gradient_kind: args.gradient_kind.map(Into::into),
        gradient_angle: args.angle.map(validate_angle).transpose()?,
        color_stops: args
            .stops
            .as_deref()
            .map(|stops| validate_color_list("stops", stops))
            .transpose()?,
        preset_key: args.preset,
        speed_ms: args.speed_ms,
        animation_direction: args.direction,
        custom_gradient_sets,
    })
}

fn print_summary(store: &BackgroundStore) {
    let state = store.state();
    println!("Background: {}", state.mode.label());
    match store.active().css() {
        Some(css) => println!("  css: {}", css),
        None => println!("  video: {}", state.video_url),
    }
}

fn print_presets(store: &BackgroundStore) {
    let current = store.state().animated.preset_key.as_str();
    println!("Animated gradient presets:");
    for preset in store.presets().iter() {
        let marker = if preset.key == current { "*" } else { " " };
        println!(
            " {} {:<8} {:<14} {} set(s)",
            marker,
            preset.key,
            preset.display_name,
            preset.gradient_sets.len()
        );
    }
    let marker = if current == CUSTOM_PRESET_KEY { "*" } else { " " };
    println!(
        " {} {:<8} {:<14} {} set(s)",
        marker,
        CUSTOM_PRESET_KEY,
        "Custom",
        store.state().animated.custom_gradient_sets.len()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{GradientKindArg, ModeArg};
    use glaze_prefs::{BackgroundMode, GradientKind};
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_args_build_empty_patch() {
        let patch = build_patch(BackgroundArgs::default(), &PresetCatalog::builtin()).unwrap();
        assert!(patch.is_empty());
    }

    #[test]
    fn solid_color_is_normalized() {
        let args = BackgroundArgs {
            mode: Some(ModeArg::Solid),
            color: Some("#AABBCC".to_string()),
            ..Default::default()
        };
        let patch = build_patch(args, &PresetCatalog::builtin()).unwrap();
        assert_eq!(
            patch,
            BackgroundPatch::new()
                .mode(BackgroundMode::Solid)
                .color("#aabbcc")
        );
    }

    #[test]
    fn gradient_flags_map_to_patch() {
        let args = BackgroundArgs {
            gradient_kind: Some(GradientKindArg::Radial),
            angle: Some(-45.0),
            stops: Some(vec!["#000".to_string(), "#fff".to_string()]),
            ..Default::default()
        };
        let patch = build_patch(args, &PresetCatalog::builtin()).unwrap();
        assert_eq!(patch.gradient_kind, Some(GradientKind::Radial));
        assert_eq!(patch.gradient_angle, Some(-45.0));
        assert_eq!(
            patch.color_stops,
            Some(vec!["#000".to_string(), "#fff".to_string()])
        );
    }

    #[test]
    fn custom_sets_are_split_and_validated() {
        let args = BackgroundArgs {
            preset: Some("custom".to_string()),
            custom_sets: vec!["#111, #222".to_string(), "#333,#444,#555".to_string()],
            ..Default::default()
        };
        let patch = build_patch(args, &PresetCatalog::builtin()).unwrap();
        assert_eq!(
            patch.custom_gradient_sets,
            Some(vec![
                vec!["#111".to_string(), "#222".to_string()],
                vec!["#333".to_string(), "#444".to_string(), "#555".to_string()],
            ])
        );
    }

    #[test]
    fn non_finite_angle_is_rejected() {
        for angle in [f64::NAN, f64::NEG_INFINITY] {
            let args = BackgroundArgs {
                angle: Some(angle),
                ..Default::default()
            };
            let err = build_patch(args, &PresetCatalog::builtin()).unwrap_err();
            assert!(matches!(err, ValidationError::InvalidAngle { .. }));
        }
    }

    #[test]
    fn bad_color_is_rejected() {
        let args = BackgroundArgs {
            color: Some("blurple".to_string()),
            ..Default::default()
        };
        let err = build_patch(args, &PresetCatalog::builtin()).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidColor { .. }));
    }

    #[test]
    fn unknown_preset_is_rejected() {
        let args = BackgroundArgs {
            preset: Some("lava-lamp".to_string()),
            ..Default::default()
        };
        let err = build_patch(args, &PresetCatalog::builtin()).unwrap_err();
        assert_eq!(err, ValidationError::UnknownPreset { key: "lava-lamp".to_string() });
    }
}

use std::{path::PathBuf, sync::Arc};

use anyhow::{Context, Result, anyhow};
use clap::{Args, Parser, Subcommand};
use inquire::{Password, Text};
use uuid::Uuid;
use wardrobe_core::{
    Category, Closet, ClothingItem, Condition, Config, Coordinates, FileStore, KeyValueStore,
    NewClothingItem, OutfitAdvice, Profile, ProviderId, StyleContext, Stylist, WeatherResponse,
    WeatherService, outfit_advice, provider::default_provider_from_config,
};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "wardrobe", version, about = "Wardrobe manager with weather-aware outfit advice")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Configure credentials for a specific weather provider.
    Configure {
        /// Provider short name, e.g. "openweather" or "weatherapi".
        provider: String,

        /// Make this provider the default even if another one is set.
        #[arg(long)]
        default: bool,
    },

    /// Show current weather.
    Weather {
        #[command(flatten)]
        location: LocationArgs,

        /// Ignore any cached reading.
        #[arg(long)]
        refresh: bool,
    },

    /// Suggest an outfit, from live weather or from a given temperature and condition.
    Outfit {
        /// Temperature in °C; skips the weather lookup.
        #[arg(long, allow_negative_numbers = true, requires = "condition", conflicts_with_all = ["lat", "lon"])]
        temp: Option<i32>,

        /// One of sunny, cloudy, rain, snow, windy.
        #[arg(long, requires = "temp")]
        condition: Option<String>,

        #[command(flatten)]
        location: LocationArgs,

        /// Bump to see another suggestion for the same weather.
        #[arg(long, default_value_t = 0)]
        seed: u32,
    },

    /// Manage clothing items.
    Closet {
        #[command(subcommand)]
        action: ClosetCommand,
    },

    /// Show or edit your profile.
    Profile {
        #[command(subcommand)]
        action: ProfileCommand,
    },

    /// Ask the stylist for advice.
    Chat {
        /// Your message.
        #[arg(required = true, trailing_var_arg = true)]
        message: Vec<String>,

        #[command(flatten)]
        location: LocationArgs,
    },
}

#[derive(Debug, Args)]
pub struct LocationArgs {
    /// Latitude; defaults to the home location in your profile.
    #[arg(long, allow_negative_numbers = true, requires = "lon")]
    pub lat: Option<f64>,

    /// Longitude; defaults to the home location in your profile.
    #[arg(long, allow_negative_numbers = true, requires = "lat")]
    pub lon: Option<f64>,
}

impl LocationArgs {
    fn explicit(&self) -> Option<Coordinates> {
        match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => Some(Coordinates::new(lat, lon)),
            _ => None,
        }
    }
}

#[derive(Debug, Args)]
pub struct ItemArgs {
    /// Item name, e.g. "Navy Peacoat".
    pub name: String,

    /// top, bottom, dress, outerwear, footwear or accessory.
    #[arg(long)]
    pub category: String,

    #[arg(long)]
    pub color: String,

    #[arg(long)]
    pub brand: Option<String>,

    /// Repeat for several seasons.
    #[arg(long = "season")]
    pub seasons: Vec<String>,

    /// Path to a photo of the item.
    #[arg(long)]
    pub image: Option<PathBuf>,
}

impl ItemArgs {
    fn into_new_item(self) -> Result<NewClothingItem> {
        Ok(NewClothingItem {
            name: self.name,
            category: Category::try_from(self.category.as_str())?,
            color: self.color,
            brand: self.brand,
            seasons: self.seasons,
            image_path: self.image,
        })
    }
}

#[derive(Debug, Subcommand)]
pub enum ClosetCommand {
    /// Add an item.
    Add(ItemArgs),
    /// List items, optionally one category.
    List {
        #[arg(long)]
        category: Option<String>,
    },
    /// Show one item.
    Show { id: Uuid },
    /// Replace an item's details.
    Update {
        id: Uuid,
        #[command(flatten)]
        item: ItemArgs,
    },
    /// Delete an item.
    Remove { id: Uuid },
    /// Toggle the favorite flag.
    Favorite { id: Uuid },
}

#[derive(Debug, Subcommand)]
pub enum ProfileCommand {
    /// Print the stored profile.
    Show,
    /// Update profile fields; prompts for a name when no field is given.
    Set {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        /// Replaces the style list. Repeatable.
        #[arg(long = "style")]
        styles: Vec<String>,
        /// Replaces the favorite color list. Repeatable.
        #[arg(long = "favorite-color")]
        colors: Vec<String>,
        #[arg(long)]
        top_size: Option<String>,
        #[arg(long)]
        bottom_size: Option<String>,
        #[arg(long)]
        shoe_size: Option<String>,
        #[command(flatten)]
        home: LocationArgs,
    },
}

/// Loaded config plus the store everything persists into.
struct App {
    config: Config,
    store: Arc<dyn KeyValueStore>,
}

impl App {
    fn open() -> Result<Self> {
        let config = Config::load()?;
        let data_dir = config.data_dir()?;
        tracing::debug!(data_dir = %data_dir.display(), "Opening data store");
        let store: Arc<dyn KeyValueStore> = Arc::new(FileStore::new(data_dir));
        Ok(Self { config, store })
    }

    fn weather_service(&self) -> Result<WeatherService> {
        let provider = default_provider_from_config(&self.config)?;
        Ok(WeatherService::new(provider, self.store.clone(), self.config.weather.clone()))
    }

    fn profile(&self) -> Result<Profile> {
        Profile::load(self.store.as_ref())
    }

    fn resolve_location(&self, args: &LocationArgs) -> Result<Coordinates> {
        if let Some(coords) = args.explicit() {
            return Ok(coords);
        }
        self.profile()?.home.ok_or_else(|| {
            anyhow!(
                "No location given.\n\
                 Hint: pass --lat/--lon, or save a home location with `wardrobe profile set --lat <lat> --lon <lon>`."
            )
        })
    }
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure { provider, default } => configure(&provider, default),
            Command::Weather { location, refresh } => {
                let app = App::open()?;
                let coords = app.resolve_location(&location)?;
                let service = app.weather_service()?;
                let reading = if refresh {
                    service.refresh(coords).await?
                } else {
                    service.current(coords).await?
                };
                print_reading(&reading);
                Ok(())
            }
            Command::Outfit { temp, condition, location, seed } => {
                if let (Some(temp), Some(condition)) = (temp, condition.as_deref()) {
                    let condition = Condition::from_name(condition);
                    print_advice(&outfit_advice(temp, &condition, seed));
                    return Ok(());
                }

                let app = App::open()?;
                let coords = app.resolve_location(&location)?;
                let (reading, advice) = app.weather_service()?.outfit_for(coords, seed).await?;
                print_reading(&reading);
                println!();
                print_advice(&advice);
                Ok(())
            }
            Command::Closet { action } => closet(action),
            Command::Profile { action } => profile(action),
            Command::Chat { message, location } => chat(&message.join(" "), &location).await,
        }
    }
}

fn configure(provider: &str, make_default: bool) -> Result<()> {
    let id = ProviderId::try_from(provider)?;
    let mut config = Config::load()?;

    if config.is_provider_configured(id) {
        println!("{id} already has an API key; entering a new one replaces it.");
    }

    let api_key = Password::new(&format!("API key for {id}:"))
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;
    let api_key = api_key.trim().to_string();
    if api_key.is_empty() {
        return Err(anyhow!("API key must not be empty"));
    }

    config.upsert_provider_api_key(id, api_key);
    if make_default {
        config.set_default_provider(id);
    }
    config.save()?;

    println!("Saved API key for {id} to {}", Config::config_file_path()?.display());
    if config.default_provider_id()? == id {
        println!("{id} is the default provider.");
    }
    Ok(())
}

fn closet(action: ClosetCommand) -> Result<()> {
    let app = App::open()?;
    let closet = Closet::new(app.store.as_ref());

    match action {
        ClosetCommand::Add(args) => {
            let item = closet.add(args.into_new_item()?)?;
            println!("Added {} ({})", item.name, item.id);
        }
        ClosetCommand::List { category } => {
            let filter = category.as_deref().map(Category::try_from).transpose()?;
            let items = closet.list(filter)?;
            if items.is_empty() {
                println!("Your closet is empty. Add something with `wardrobe closet add`.");
            }
            for item in &items {
                print_item_line(item);
            }
        }
        ClosetCommand::Show { id } => print_item(&closet.get(id)?),
        ClosetCommand::Update { id, item } => {
            let item = closet.update(id, item.into_new_item()?)?;
            println!("Updated {} ({})", item.name, item.id);
        }
        ClosetCommand::Remove { id } => {
            let item = closet.remove(id)?;
            println!("Removed {}", item.name);
        }
        ClosetCommand::Favorite { id } => {
            let favorite = closet.toggle_favorite(id)?;
            println!("{}", if favorite { "Marked as favorite" } else { "Removed from favorites" });
        }
    }
    Ok(())
}

fn profile(action: ProfileCommand) -> Result<()> {
    let app = App::open()?;
    let mut profile = app.profile()?;

    match action {
        ProfileCommand::Show => print_profile(&profile),
        ProfileCommand::Set { name, email, styles, colors, top_size, bottom_size, shoe_size, home } => {
            let nothing_given = name.is_none()
                && email.is_none()
                && styles.is_empty()
                && colors.is_empty()
                && top_size.is_none()
                && bottom_size.is_none()
                && shoe_size.is_none()
                && home.explicit().is_none();

            if nothing_given {
                profile.display_name = Text::new("Display name:")
                    .with_initial_value(&profile.display_name)
                    .prompt()
                    .context("Failed to read display name")?;
            }
            if let Some(name) = name {
                profile.display_name = name;
            }
            if email.is_some() {
                profile.email = email;
            }
            if !styles.is_empty() {
                profile.style_preferences = styles;
            }
            if !colors.is_empty() {
                profile.favorite_colors = colors;
            }
            if top_size.is_some() {
                profile.sizes.top = top_size;
            }
            if bottom_size.is_some() {
                profile.sizes.bottom = bottom_size;
            }
            if shoe_size.is_some() {
                profile.sizes.shoe = shoe_size;
            }
            if let Some(coords) = home.explicit() {
                profile.home = Some(coords);
            }

            profile.save(app.store.as_ref())?;
            print_profile(&profile);
        }
    }
    Ok(())
}

async fn chat(message: &str, location: &LocationArgs) -> Result<()> {
    let app = App::open()?;
    let profile = app.profile()?;
    let closet_items = Closet::new(app.store.as_ref()).count()?;

    // A failed weather lookup must not fail the chat.
    let today = match location.explicit().or(profile.home) {
        Some(coords) => match app.weather_service() {
            Ok(service) => match service.outfit_for(coords, 0).await {
                Ok((_, advice)) => Some(advice),
                Err(e) => {
                    tracing::warn!(error = %e, "Weather lookup for chat failed");
                    None
                }
            },
            Err(e) => {
                tracing::debug!(error = %e, "No weather provider for chat");
                None
            }
        },
        None => None,
    };

    let context = StyleContext { profile: &profile, closet_items, today: today.as_ref() };
    let reply = Stylist::reply(message, &context);

    println!("{}", reply.text);
    for suggestion in &reply.suggestions {
        println!("  • {suggestion}");
    }
    Ok(())
}

fn print_reading(reading: &WeatherResponse) {
    println!("{} ({})", reading.location_name, reading.provider);
    println!(
        "  {:.1}°C, feels like {:.1}°C, {}",
        reading.temperature_c, reading.feels_like_c, reading.condition
    );
    println!(
        "  Humidity {}%, wind {:.1} m/s{}",
        reading.humidity_pct,
        reading.wind_speed_mps,
        if reading.is_night { ", night" } else { "" }
    );
    println!("  Observed {}", reading.observation_time.format("%Y-%m-%d %H:%M UTC"));
}

fn print_advice(advice: &OutfitAdvice) {
    println!("{}", advice.title);
    if !advice.badges.is_empty() {
        println!("[{}]", advice.badges.join("] ["));
    }
    for item in &advice.items {
        let tags = if item.tags.is_empty() { String::new() } else { format!(" ({})", item.tags.join(", ")) };
        println!("  {} {:<10} {}{}", item.icon, item.slot.as_str(), item.label, tags);
    }
    for tip in &advice.tips {
        println!("  - {tip}");
    }
}

fn print_item_line(item: &ClothingItem) {
    let star = if item.favorite { "★" } else { " " };
    println!("{star} {}  {:<10} {} ({})", item.id, item.category, item.name, item.color);
}

fn print_item(item: &ClothingItem) {
    println!("{}{}", item.name, if item.favorite { " ★" } else { "" });
    println!("  id:       {}", item.id);
    println!("  category: {}", item.category);
    println!("  color:    {}", item.color);
    if let Some(brand) = &item.brand {
        println!("  brand:    {brand}");
    }
    if !item.seasons.is_empty() {
        println!("  seasons:  {}", item.seasons.join(", "));
    }
    if let Some(image) = &item.image_path {
        println!("  image:    {}", image.display());
    }
    println!("  added:    {}", item.added_at.format("%Y-%m-%d"));
}

fn print_profile(profile: &Profile) {
    println!("{}", profile.greeting());
    if let Some(email) = &profile.email {
        println!("  email:  {email}");
    }
    if !profile.style_preferences.is_empty() {
        println!("  styles: {}", profile.style_preferences.join(", "));
    }
    if !profile.favorite_colors.is_empty() {
        println!("  colors: {}", profile.favorite_colors.join(", "));
    }
    let sizes = [("top", &profile.sizes.top), ("bottom", &profile.sizes.bottom), ("shoe", &profile.sizes.shoe)];
    for (label, size) in sizes {
        if let Some(size) = size {
            println!("  {label} size: {size}");
        }
    }
    if let Some(home) = profile.home {
        println!("  home:   {home}");
    }
}

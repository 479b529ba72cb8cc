//! Built-in presentation table.
//!
//! Category keys are the NWS event vocabulary and must match the API
//! byte for byte, including its inconsistent capitalization
//! ("Small Craft Advisory For Hazardous Seas" vs "Small Craft Advisory for Winds").

use crate::record::PresentationRecord;

const fn entry(
    category: &'static str,
    color: &'static str,
    icons: &'static [&'static str],
) -> PresentationRecord<'static> {
    PresentationRecord::new(category, color, icons)
}

pub(crate) const ALERT_PRESENTATIONS: &[PresentationRecord<'static>] = &[
    entry("911 Telephone Outage", "grey78", &[":telephone_receiver:", ":man_police_officer:"]),
    entry("Administrative Message", "grey78", &[":pen:"]),
    entry("Air Quality Alert", "grey50", &[":mask:"]),
    entry("Air Stagnation Advisory", "grey50", &[":mask:"]),
    entry("Arroyo and Small Stream Flood Advisory", "medium_spring_green", &[":water_wave:"]),
    entry("Ashfall Advisory", "grey39", &[":volcano:"]),
    entry("Ashfall Warning", "grey66", &[":volcano:", ":exclamation_mark:"]),
    entry("Avalanche Advisory", "orange3", &[":snow_capped_mountain:"]),
    entry("Avalanche Watch", "bright_white", &[":snow_capped_mountain:", ":eyes:"]),
    entry("Avalanche Warning", "dodger_blue1", &[":snow_capped_mountain:", ":exclamation_mark:"]),
    entry("Beach Hazards Statement", "medium_turquoise", &[":beach_with_umbrella:"]),
    entry("Blizzard Watch", "light_steel_blue", &[":snowflake:", ":eyes:"]),
    entry("Blizzard Warning", "orange_red1", &[":snowflake:", ":wind_blowing_face:", ":exclamation_mark:"]),
    entry("Blowing Dust Advisory", "navajo_white3", &[":dashing_away:"]),
    entry("Blowing Dust Warning", "dark_khaki", &[":dashing_away:", ":exclamation_mark:"]),
    entry("Blue Alert", "bright_blue", &[":police_car_light:", ":blue_circle:"]),
    entry("Brisk Wind Advisory", "thistle3", &[":wind_blowing_face:"]),
    entry("Child Abduction Emergency", "bright_white", &[":loudly_crying_face:", ":megaphone:"]),
    entry("Civil Danger Warning", "light_salmon1", &[":warning:", ":exclamation_mark:"]),
    entry("Civil Emergency Message", "light_salmon1", &[":megaphone:"]),
    entry("Coastal Flood Advisory", "light_sea_green", &[":water_wave:"]),
    entry("Coastal Flood Statement", "aquamarine3", &[":water_wave:"]),
    entry("Coastal Flood Warning", "green3", &[":water_wave:", ":exclamation_mark:"]),
    entry("Coastal Flood Watch", "aquamarine1", &[":water_wave:", ":eyes:"]),
    entry("Cold Weather Advisory", "light_cyan1", &[":cold_face:"]),
    entry("Dense Fog Advisory", "grey62", &[":fog:"]),
    entry("Dense Smoke Advisory", "grey46", &[":fog:", ":fire:"]),
    entry("Dust Advisory", "navajo_white3", &[":dashing_away:"]),
    entry("Dust Storm Warning", "wheat4", &[":dashing_away:", ":exclamation_mark:"]),
    entry("Earthquake Warning", "indian_red", &[":house:", ":warning:"]),
    entry("Evacuation Immediate", "chartreuse1", &[":person_running:", ":exclamation_mark:"]),
    entry("Excessive Heat Watch", "light_coral", &[":hot_face:", ":eyes:"]),
    entry("Extreme Cold Warning", "blue1", &[":cold_face:", ":exclamation_mark:"]),
    entry("Extreme Cold Watch", "dodger_blue2", &[":cold_face:", ":eyes:"]),
    entry("Extreme Fire Danger", "dark_orange3", &[":fire:", ":exclamation_mark:"]),
    entry("Excessive Heat Warning", "medium_violet_red", &[":hot_face:", ":thermometer:", ":exclamation_mark:"]),
    entry("Extreme Heat Warning", "medium_violet_red", &[":hot_face:", ":thermometer:", ":exclamation_mark:"]),
    entry("Extreme Heat Watch", "light_coral", &[":hot_face:", ":eyes:"]),
    entry("Extreme Wind Warning", "dark_orange", &[":wind_blowing_face:", ":exclamation_mark:"]),
    entry("Fire Warning", "orange4", &[":fire:", ":exclamation_mark:"]),
    entry("Fire Weather Watch", "navajo_white1", &[":fire:", ":eyes:"]),
    entry("Flash Flood Statement", "indian_red", &[":water_wave:"]),
    entry("Flash Flood Watch", "sea_green3", &[":eyes:", ":water_wave:"]),
    entry("Flash Flood Warning", "dark_red", &[":exclamation_mark:", ":water_wave:"]),
    entry("Flood Advisory", "spring_green1", &[":water_wave:"]),
    entry("Flood Statement", "green1", &[":water_wave:"]),
    entry("Flood Warning", "bright_green", &[":exclamation_mark:", ":water_wave:"]),
    entry("Flood Watch", "sea_green2", &[":eyes:", ":water_wave:"]),
    entry("Freeze Warning", "medium_purple4", &[":cold_face:", ":exclamation_mark:"]),
    entry("Freeze Watch", "cyan1", &[":cold_face:", ":eyes:"]),
    entry("Freezing Fog Advisory", "steel_blue", &[":fog:", ":snowflake:"]),
    entry("Freezing Rain Advisory", "orchid", &[":cloud_with_rain:", ":snowflake:"]),
    entry("Freezing Spray Advisory", "deep_sky_blue1", &[":water_wave:", ":snowflake:"]),
    entry("Frost Advisory", "cornflower_blue", &[":cold_face:"]),
    entry("Gale Warning", "plum3", &[":anchor:", ":wind_blowing_face:"]),
    entry("Gale Watch", "pink1", &[":anchor:", ":eyes:"]),
    entry("Hard Freeze Watch", "royal_blue1", &[":cold_face:", ":eyes:"]),
    entry("Hard Freeze Warning", "dark_violet", &[":cold_face:", ":exclamation_mark:"]),
    entry("Hazardous Materials Warning", "indian_red1", &[":biohazard:", ":exclamation_mark:"]),
    entry("Hazardous Seas Warning", "thistle1", &[":ship:", ":exclamation_mark:"]),
    entry("Hazardous Seas Watch", "dark_slate_gray1", &[":ship:", ":eyes:"]),
    entry("Hazardous Weather Outlook", "pale_green1", &[":memo:"]),
    entry("Heat Advisory", "orange1", &[":hot_face:"]),
    entry("Heavy Freezing Spray Warning", "deep_sky_blue2", &[":water_wave:", ":snowflake:", ":exclamation_mark:"]),
    entry("Heavy Freezing Spray Watch", "deep_sky_blue3", &[":water_wave:", ":snowflake:", ":eyes:"]),
    entry("High Surf Warning", "orchid1", &[":person_surfing:", ":exclamation_mark:"]),
    entry("High Surf Advisory", "medium_orchid", &[":person_surfing:"]),
    entry("High Wind Watch", "dark_goldenrod", &[":wind_blowing_face:", ":eyes:"]),
    entry("High Wind Warning", "light_goldenrod3", &[":wind_blowing_face:", ":wind_blowing_face:", ":wind_blowing_face:"]),
    entry("Hurricane Force Wind Watch", "medium_purple", &[":wind_blowing_face:", ":eyes:"]),
    entry("Hurricane Force Wind Warning", "red3", &[":cyclone:", ":wind_blowing_face:", ":exclamation_mark:"]),
    entry("Hurricane Local Statement", "light_goldenrod1", &[":cyclone:", ":memo:"]),
    entry("Hurricane Watch", "magenta", &[":eyes:", ":cyclone:", ":water_wave:"]),
    entry("Hurricane Warning", "red", &[":exclamation_mark:", ":cyclone:", ":water_wave:"]),
    entry("Hydrologic Advisory", "spring_green2", &[":droplet:"]),
    entry("Hydrologic Outlook", "light_green", &[]),
    entry("Ice Storm Warning", "dark_magenta", &[":ice:", ":exclamation_mark:"]),
    entry("Lake Effect Snow Advisory", "turquoise2", &[":snowflake:"]),
    entry("Lake Effect Snow Watch", "light_sky_blue1", &[":snowflake:", ":eyes:"]),
    entry("Lake Effect Snow Warning", "dark_cyan", &[":snowflake:", ":exclamation_mark:"]),
    entry("Lake Wind Advisory", "tan", &[":fish:", ":wind_blowing_face:"]),
    entry("Lakeshore Flood Advisory", "light_sea_green", &[":fish:", ":water_wave:"]),
    entry("Lakeshore Flood Statement", "aquamarine3", &[":fish:", ":water_wave:"]),
    entry("Lakeshore Flood Warning", "green3", &[":fish:", ":water_wave:", ":exclamation_mark:"]),
    entry("Lakeshore Flood Watch", "aquamarine1", &[":fish:", ":water_wave:", ":eyes:"]),
    entry("Law Enforcement Warning", "grey74", &[":police_car_light:", ":exclamation_mark:"]),
    entry("Local Area Emergency", "grey74", &[":police_car_light:"]),
    entry("Low Water Advisory", "wheat1", &[":droplet:"]),
    entry("Marine Weather Statement", "light_pink1", &[":anchor:"]),
    entry("Nuclear Power Plant Warning", "indian_red1", &[":radioactive:", ":exclamation_mark:"]),
    entry("Radiological Hazard Warning", "indian_red1", &[":radioactive:", ":exclamation_mark:"]),
    entry("Red Flag Warning", "bright_magenta", &[":triangular_flag:"]),
    entry("Rip Current Statement", "medium_turquoise", &[":water_wave:"]),
    entry("Severe Thunderstorm Watch", "yellow", &[":eyes:", ":zap:"]),
    entry("Severe Thunderstorm Warning", "bright_yellow", &[":exclamation_mark:", ":zap:"]),
    entry("Severe Weather Statement", "cyan2", &[":zap:", ":memo:"]),
    entry("Shelter In Place Warning", "salmon1", &[":house:", ":exclamation_mark:"]),
    entry("Short Term Forecast", "pale_green1", &[":memo:"]),
    entry("Small Craft Advisory", "plum2", &[":sailboat:"]),
    entry("Small Craft Advisory For Hazardous Seas", "plum2", &[":sailboat:", ":water_wave:"]),
    entry("Small Craft Advisory for Rough Bar", "plum2", &[":sailboat:", ":warning:"]),
    entry("Small Craft Advisory for Winds", "plum2", &[":sailboat:", ":wind_blowing_face:"]),
    entry("Small Stream Flood Advisory", "spring_green1", &[":water_wave:"]),
    entry("Snow Squall Warning", "deep_pink3", &[":snowflake:", ":wind_blowing_face:", ":exclamation_mark:"]),
    entry("Special Marine Warning", "sandy_brown", &[":anchor:", ":exclamation_mark:"]),
    entry("Special Weather Statement", "misty_rose1", &[":double_exclamation_mark:"]),
    entry("Storm Warning", "medium_purple1", &[":wind_blowing_face:", ":exclamation_mark:"]),
    entry("Storm Surge Warning", "purple", &[":water_wave:", ":house:", ":exclamation_mark:"]),
    entry("Storm Surge Watch", "medium_orchid1", &[":water_wave:", ":eyes:"]),
    entry("Storm Watch", "light_pink3", &[":wind_blowing_face:", ":eyes:"]),
    entry("Test", "bright_white", &[":test_tube:"]),
    entry("Tornado Warning", "red", &[":exclamation_mark:", ":tornado:"]),
    entry("Tornado Watch", "red", &[":eyes:", ":tornado:"]),
    entry("Tropical Depression Local Statement", "grey58", &[":cyclone:", ":memo:"]),
    entry("Tropical Storm Local Statement", "light_goldenrod2", &[":cyclone:", ":memo:"]),
    entry("Tropical Storm Watch", "blue", &[":eyes:", ":cyclone:"]),
    entry("Tropical Storm Warning", "blue", &[":exclamation_mark:", ":cyclone:"]),
    entry("Tsunami Advisory", "dark_orange3", &[":water_wave:"]),
    entry("Tsunami Warning", "orange_red1", &[":water_wave:", ":exclamation_mark:", ":exclamation_mark:"]),
    entry("Tsunami Watch", "magenta1", &[":water_wave:", ":eyes:"]),
    entry("Typhoon Local Statement", "light_goldenrod1", &[":cyclone:", ":memo:"]),
    entry("Urban and Small Stream Flood Advisory", "spring_green1", &[":water_wave:", ":house:"]),
    entry("Volcano Warning", "rosy_brown", &[":volcano:", ":exclamation_mark:"]),
    entry("Wind Advisory", "tan", &[":wind_blowing_face:"]),
    entry("Wind Chill Advisory", "pale_turquoise1", &[":cold_face:", ":wind_blowing_face:"]),
    entry("Wind Chill Watch", "cadet_blue", &[":cold_face:", ":wind_blowing_face:", ":eyes:"]),
    entry("Wind Chill Warning", "steel_blue1", &[":cold_face:", ":wind_blowing_face:", ":exclamation_mark:"]),
    entry("Winter Weather Advisory", "slate_blue1", &[":snowflake:"]),
    entry("Winter Storm Watch", "steel_blue", &[":snowflake:", ":eyes:"]),
    entry("Winter Storm Warning", "hot_pink", &[":cold_face:", ":snowflake:", ":exclamation_mark:"]),
];

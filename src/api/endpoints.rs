use crate::config::Region;

/// URL builders for the four lookups. The credential is not part of these
/// URLs; the client appends it as a query parameter.
#[derive(Debug, Clone, Copy)]
pub struct Endpoints {
    region: Region,
}

impl Endpoints {
    pub fn new(region: Region) -> Self {
        Endpoints { region }
    }

    fn platform_base(&self) -> String {
        format!("https://{}.api.riotgames.com", self.region.platform())
    }

    fn regional_base(&self) -> String {
        format!("https://{}.api.riotgames.com", self.region.regional_routing())
    }

    pub fn summoner_by_name(&self, name: &str) -> String {
        format!(
            "{}/lol/summoner/v4/summoners/by-name/{}",
            self.platform_base(),
            urlencoding::encode(name)
        )
    }

    pub fn league_entries(&self, summoner_id: &str) -> String {
        format!(
            "{}/lol/league/v4/entries/by-summoner/{}",
            self.platform_base(),
            summoner_id
        )
    }

    pub fn match_ids(&self, puuid: &str, count: u8) -> String {
        format!(
            "{}/lol/match/v5/matches/by-puuid/{}/ids?count={}",
            self.regional_base(),
            puuid,
            count
        )
    }

    pub fn match_detail(&self, match_id: &str) -> String {
        format!("{}/lol/match/v5/matches/{}", self.regional_base(), match_id)
    }
}

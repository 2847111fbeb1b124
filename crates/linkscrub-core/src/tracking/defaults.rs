//! Built-in tracking parameter table.
//!
//! Names are stored in canonical (trimmed, lower-case) form. This is
//! configuration data; matching logic lives in the parent module.

pub const DEFAULT_TRACKING_PARAMS: &[&str] = &[
    // Google Analytics / Urchin campaign tags
    "utm_source",
    "utm_medium",
    "utm_campaign",
    "utm_term",
    "utm_content",
    "utm_id",
    "utm_name",
    "utm_cid",
    "utm_reader",
    "utm_referrer",
    "utm_social",
    "utm_social-type",
    "utm_brand",
    "utm_place",
    "utm_pubreferrer",
    "utm_swu",
    "utm_viz_id",
    "utm_source_platform",
    "utm_creative_format",
    "utm_marketing_tactic",
    "utm_campaign_id",
    "utm_adgroup",
    "utm_keyword",
    "utm_device",
    "utm_network",
    "utm_position",
    "utm_placement",
    "utm_matchtype",
    "utm_expid",
    "utm_int",
    "utm_emailid",
    "utm_userid",
    "utm_mailing",
    // Google Ads / DoubleClick / GA cross-domain
    "gclid",
    "gclsrc",
    "gbraid",
    "wbraid",
    "dclid",
    "gad_source",
    "gad_campaignid",
    "_ga",
    "_gl",
    "_gac",
    "_gid",
    "ga_source",
    "ga_medium",
    "ga_campaign",
    "ga_term",
    "ga_content",
    "ga_place",
    "ga_userid",
    "ga_sid",
    "ga_hid",
    "ga_fc",
    "ga_wpid",
    "ved",
    "usg",
    "ei",
    "srsltid",
    "gs_lcp",
    "gs_lcrp",
    "gs_l",
    "sclient",
    "oq",
    "aqs",
    "sourceid",
    "uact",
    "cshid",
    "iflsig",
    // Meta / Facebook / Instagram
    "fbclid",
    "fb_action_ids",
    "fb_action_types",
    "fb_ref",
    "fb_source",
    "fb_comment_id",
    "fbc",
    "fbp",
    "action_object_map",
    "action_type_map",
    "action_ref_map",
    "igshid",
    "igsh",
    "ig_rid",
    "ig_mid",
    "hc_ref",
    "hc_location",
    "__tn__",
    "__cft__",
    "__xts__",
    "mibextid",
    "rdid",
    // Microsoft / Bing
    "msclkid",
    "mkt_tok",
    "cvid",
    "ocid",
    // X / Twitter
    "twclid",
    "ref_src",
    "ref_url",
    "twsrc",
    "twgr",
    "twcamp",
    "twterm",
    "twcon",
    // TikTok
    "ttclid",
    "_t",
    "_r",
    "is_from_webapp",
    "sender_device",
    "is_copy_url",
    "tt_medium",
    "tt_content",
    // LinkedIn
    "li_fat_id",
    "lipi",
    "licu",
    "trk",
    "trkinfo",
    "trackingid",
    "refid",
    "midtoken",
    "midsig",
    "trkemail",
    "lici",
    "li_source",
    "li_medium",
    // Reddit / Pinterest / Snapchat / Quora / Yandex
    "rdt_cid",
    "share_id",
    "ref_campaign",
    "ref_source",
    "epik",
    "sc_cid",
    "sc_channel",
    "sc_country",
    "sc_funnel",
    "sc_medium",
    "sc_segment",
    "qclid",
    "yclid",
    "ysclid",
    "_openstat",
    // Mailchimp / HubSpot / Marketo / other email platforms
    "mc_cid",
    "mc_eid",
    "mc_tc",
    "_hsenc",
    "_hsmi",
    "__hssc",
    "__hstc",
    "__hsfp",
    "hsctatracking",
    "hsa_acc",
    "hsa_ad",
    "hsa_cam",
    "hsa_grp",
    "hsa_kw",
    "hsa_la",
    "hsa_mt",
    "hsa_net",
    "hsa_ol",
    "hsa_src",
    "hsa_tgt",
    "hsa_ver",
    "_ke",
    "_kx",
    "ml_subscriber",
    "ml_subscriber_hash",
    "oly_anon_id",
    "oly_enc_id",
    "vero_conv",
    "vero_id",
    "wickedid",
    "wickedsource",
    "mkt_campaign",
    "elqtrackid",
    "elqtrack",
    "elq",
    "elqaid",
    "elqat",
    "elqcampaignid",
    "recipientid",
    "campaignid",
    "bsft_aaid",
    "bsft_clkid",
    "bsft_eid",
    "bsft_ek",
    "bsft_lx",
    "bsft_mid",
    "bsft_mime_type",
    "bsft_tv",
    "bsft_uid",
    "ss_campaign_id",
    "ss_campaign_name",
    "ss_campaign_sent_date",
    "ss_email_id",
    "ss_source",
    "spm",
    "sfmc_id",
    "sfmc_activityid",
    "s_cid",
    "s_kwcid",
    "ef_id",
    "cmpid",
    "cmp",
    "mbid",
    "nr_email_referer",
    "email_source",
    "email_referrer",
    "ncid",
    "ns_campaign",
    "ns_mchannel",
    "ns_source",
    "ns_linkname",
    "ns_fee",
    // Affiliate networks
    "irclickid",
    "irgwc",
    "clickid",
    "click_id",
    "affiliate_id",
    "aff_id",
    "aff_sub",
    "aff_sub2",
    "aff_sub3",
    "aff_sub4",
    "aff_sub5",
    "aff_trace_key",
    "afftrack",
    "awc",
    "cjevent",
    "cjdata",
    "ranmid",
    "raneaid",
    "ransiteid",
    "ranlinkid",
    "zanpid",
    "pfid",
    "pf_rd_i",
    "pf_rd_m",
    "pf_rd_p",
    "pf_rd_r",
    "pf_rd_s",
    "pf_rd_t",
    "pd_rd_i",
    "pd_rd_r",
    "pd_rd_w",
    "pd_rd_wg",
    "_encoding",
    "psc",
    "linkcode",
    "linkid",
    "creativeasin",
    "ascsubtag",
    "creative",
    "smid",
    "content-id",
    "dib",
    "dib_tag",
    "sprefix",
    "crid",
    // Ad servers and attribution SDKs
    "adgroupid",
    "adid",
    "ad_id",
    "adset_id",
    "adset_name",
    "ad_name",
    "campaign_id",
    "campaign_name",
    "creative_id",
    "placement_id",
    "matchtype",
    "devicemodel",
    "adposition",
    "targetid",
    "feeditemid",
    "loc_interest_ms",
    "loc_physical_ms",
    "obclid",
    "outbrain_click_id",
    "tblci",
    "taboola_click_id",
    "vmcid",
    "zclid",
    "mtm_source",
    "mtm_medium",
    "mtm_campaign",
    "mtm_keyword",
    "mtm_content",
    "mtm_cid",
    "mtm_group",
    "mtm_placement",
    "pk_source",
    "pk_medium",
    "pk_campaign",
    "pk_keyword",
    "pk_content",
    "pk_cid",
    "piwik_campaign",
    "piwik_keyword",
    "piwik_kwd",
    "matomo_campaign",
    "matomo_keyword",
    "matomo_source",
    "matomo_medium",
    "matomo_content",
    "matomo_cid",
    "matomo_group",
    "matomo_placement",
    "_branch_match_id",
    "_branch_referrer",
    "adj_t",
    "adj_campaign",
    "adj_adgroup",
    "adj_creative",
    "af_sub1",
    "af_sub2",
    "af_sub3",
    "af_sub4",
    "af_sub5",
    "af_c_id",
    "af_adset",
    "af_ad",
    "af_click_lookback",
    "af_channel",
    "kochava_device_id",
    "tt_device_id",
    "_bta_tid",
    "_bta_c",
    "trk_contact",
    "trk_msg",
    "trk_module",
    "trk_sid",
    "gdfms",
    "gdftrk",
    "gdffi",
    // Generic referrer / session markers
    "referrer",
    "source",
    "campaign",
    "medium",
    "redirect_log_mongo_id",
    "redirect_mongo_id",
    "sb_referer_host",
    "nb_klid",
    "xtor",
    "at_medium",
    "at_campaign",
    "at_custom1",
    "at_custom2",
    "at_custom3",
    "at_custom4",
    "at_ptr_name",
    "at_recipient_id",
    "at_recipient_list",
    "at_send_date",
    "ito",
    "itm_source",
    "itm_medium",
    "itm_campaign",
    "itm_content",
    "itm_term",
    "int_source",
    "int_medium",
    "int_campaign",
    "int_content",
    "int_term",
    "cm_mmc",
    "cm_ven",
    "cm_cat",
    "cm_pla",
    "cm_ite",
    "cm_re",
    "cm_sp",
    "wt_mc",
    "wt.mc_id",
    "wt_zmc",
    "wtrid",
    "icid",
    "iclid",
    "intcmp",
    "ust",
    "rtid",
    "_bhlid",
];
